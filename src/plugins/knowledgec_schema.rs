//! KnowledgeC (Duet) database layouts, one fingerprint per macOS release.
//!
//! Every table of the store is listed with its columns in declaration
//! order. Newer releases are added as new fingerprints, never by loosening
//! an existing one.

use crate::core::schema::{ColumnSpec, SchemaFingerprint, TableSpec};

/// Tables the KnowledgeC query reads from.
pub const REQUIRED_TABLES: &[&str] = &["ZOBJECT", "ZSTRUCTUREDMETADATA"];

/// Known layouts in match order.
pub static FINGERPRINTS: &[&SchemaFingerprint] = &[&MACOS_10_13, &MACOS_10_14];

/// KnowledgeC layout shipped with macOS 10.13.
pub static MACOS_10_13: SchemaFingerprint = SchemaFingerprint {
    name: "macos-10.13",
    tables: &[
        TableSpec {
            name: "ACHANGE",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZCHANGETYPE", "INTEGER"),
                ColumnSpec::new("ZENTITY", "INTEGER"),
                ColumnSpec::new("ZENTITYPK", "INTEGER"),
                ColumnSpec::new("ZTRANSACTIONID", "INTEGER"),
                ColumnSpec::new("ZCOLUMNS", "BLOB"),
                ColumnSpec::new("ZTOMBSTONE0", "BLOB"),
                ColumnSpec::new("ZTOMBSTONE1", "BLOB"),
                ColumnSpec::new("ZTOMBSTONE2", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ATRANSACTION",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZTIMESTAMP", "FLOAT"),
                ColumnSpec::new("ZAUTHOR", "VARCHAR"),
                ColumnSpec::new("ZBUNDLEID", "VARCHAR"),
                ColumnSpec::new("ZCONTEXTNAME", "VARCHAR"),
                ColumnSpec::new("ZPROCESSID", "VARCHAR"),
                ColumnSpec::new("ZQUERYGEN", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZADDITIONCHANGESET",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZSEQUENCENUMBER", "INTEGER"),
                ColumnSpec::new("ZVERSION", "INTEGER"),
                ColumnSpec::new("ZENDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZSTARTDATE", "TIMESTAMP"),
                ColumnSpec::new("ZCKFOREIGNKEY", "VARCHAR"),
                ColumnSpec::new("ZCKRECORDID", "VARCHAR"),
                ColumnSpec::new("ZDEVICEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZCHANGESET", "BLOB"),
                ColumnSpec::new("ZCKRECORDSYSTEMFIELDS", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZCONTEXTUALCHANGEREGISTRATION",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZCREATIONDATE", "TIMESTAMP"),
                ColumnSpec::new("ZIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZPROPERTIES", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZCONTEXTUALKEYPATH",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZDEVICEID", "INTEGER"),
                ColumnSpec::new("ZISEPHEMERAL", "INTEGER"),
                ColumnSpec::new("ZISUSERCENTRIC", "INTEGER"),
                ColumnSpec::new("ZCREATIONDATE", "TIMESTAMP"),
                ColumnSpec::new("ZLASTMODIFIEDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZKEY", "VARCHAR"),
                ColumnSpec::new("ZVALUE", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZCUSTOMMETADATA",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZINTEGERVALUE", "INTEGER"),
                ColumnSpec::new("ZOBJECT", "INTEGER"),
                ColumnSpec::new("Z8_OBJECT", "INTEGER"),
                ColumnSpec::new("ZDATEVALUE", "TIMESTAMP"),
                ColumnSpec::new("ZDOUBLEVALUE", "FLOAT"),
                ColumnSpec::new("ZNAME", "VARCHAR"),
                ColumnSpec::new("ZSTRINGVALUE", "VARCHAR"),
                ColumnSpec::new("ZVALUEHASH", "VARCHAR"),
                ColumnSpec::new("ZBINARYVALUE", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZDELETIONCHANGESET",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZSEQUENCENUMBER", "INTEGER"),
                ColumnSpec::new("ZVERSION", "INTEGER"),
                ColumnSpec::new("ZENDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZSTARTDATE", "TIMESTAMP"),
                ColumnSpec::new("ZCKFOREIGNKEY", "VARCHAR"),
                ColumnSpec::new("ZCKRECORDID", "VARCHAR"),
                ColumnSpec::new("ZDEVICEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZCHANGESET", "BLOB"),
                ColumnSpec::new("ZCKRECORDSYSTEMFIELDS", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZHISTOGRAM",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZSTREAMTYPECODE", "INTEGER"),
                ColumnSpec::new("ZENDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZSTARTDATE", "TIMESTAMP"),
                ColumnSpec::new("ZDEVICEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZSTREAMNAME", "VARCHAR"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZHISTOGRAMVALUE",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZCOUNT", "INTEGER"),
                ColumnSpec::new("ZINTEGERVALUE", "INTEGER"),
                ColumnSpec::new("ZHISTOGRAM", "INTEGER"),
                ColumnSpec::new("ZSTRINGVALUE", "VARCHAR"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZOBJECT",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZUUIDHASH", "INTEGER"),
                ColumnSpec::new("ZEVENT", "INTEGER"),
                ColumnSpec::new("ZSOURCE", "INTEGER"),
                ColumnSpec::new("ZCATEGORYTYPE", "INTEGER"),
                ColumnSpec::new("ZINTEGERVALUE", "INTEGER"),
                ColumnSpec::new("ZENDDAYOFWEEK", "INTEGER"),
                ColumnSpec::new("ZENDSECONDOFDAY", "INTEGER"),
                ColumnSpec::new("ZHASCUSTOMMETADATA", "INTEGER"),
                ColumnSpec::new("ZHASSTRUCTUREDMETADATA", "INTEGER"),
                ColumnSpec::new("ZSECONDSFROMGMT", "INTEGER"),
                ColumnSpec::new("ZSHOULDSYNC", "INTEGER"),
                ColumnSpec::new("ZSTARTDAYOFWEEK", "INTEGER"),
                ColumnSpec::new("ZSTARTSECONDOFDAY", "INTEGER"),
                ColumnSpec::new("ZVALUECLASS", "INTEGER"),
                ColumnSpec::new("ZVALUEINTEGER", "INTEGER"),
                ColumnSpec::new("ZVALUETYPECODE", "INTEGER"),
                ColumnSpec::new("ZSTRUCTUREDMETADATA", "INTEGER"),
                ColumnSpec::new("ZVALUE", "INTEGER"),
                ColumnSpec::new("Z8_VALUE", "INTEGER"),
                ColumnSpec::new("ZIDENTIFIERTYPE", "INTEGER"),
                ColumnSpec::new("ZQUANTITYTYPE", "INTEGER"),
                ColumnSpec::new("ZOBJECT", "INTEGER"),
                ColumnSpec::new("Z8_OBJECT", "INTEGER"),
                ColumnSpec::new("ZSUBJECT", "INTEGER"),
                ColumnSpec::new("Z8_SUBJECT", "INTEGER"),
                ColumnSpec::new("ZCREATIONDATE", "TIMESTAMP"),
                ColumnSpec::new("ZCONFIDENCE", "FLOAT"),
                ColumnSpec::new("ZENDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZSTARTDATE", "TIMESTAMP"),
                ColumnSpec::new("ZVALUEDOUBLE", "FLOAT"),
                ColumnSpec::new("ZDOUBLEVALUE", "FLOAT"),
                ColumnSpec::new("ZUUID", "VARCHAR"),
                ColumnSpec::new("ZSTREAMNAME", "VARCHAR"),
                ColumnSpec::new("ZVALUESTRING", "VARCHAR"),
                ColumnSpec::new("ZSTRING", "VARCHAR"),
                ColumnSpec::new("ZVERBPHRASE", "VARCHAR"),
                ColumnSpec::new("ZMETADATA", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZSOURCE",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZUSERID", "INTEGER"),
                ColumnSpec::new("ZBUNDLEID", "VARCHAR"),
                ColumnSpec::new("ZDEVICEID", "VARCHAR"),
                ColumnSpec::new("ZGROUPID", "VARCHAR"),
                ColumnSpec::new("ZITEMID", "VARCHAR"),
                ColumnSpec::new("ZSOURCEID", "VARCHAR"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZSTRUCTUREDMETADATA",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__ALGORITHM", "INTEGER"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__ASSETVERSION", "INTEGER"),
                ColumnSpec::new("Z_DKAPPINSTALLMETADATAKEY__ISINSTALL", "INTEGER"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ISPUBLICLYINDEXABLE", "INTEGER"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__PROCESSIDENTIFIER", "INTEGER"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__ROUTECHANGEREASON", "INTEGER"),
                ColumnSpec::new("Z_DKBLUETOOTHMETADATAKEY__DEVICETYPE", "INTEGER"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__HASDATE", "INTEGER"),
                ColumnSpec::new("Z_DKGLANCELAUNCHMETADATA__DEVICEIDENTIFIER", "INTEGER"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__DONATEDBYSIRI", "INTEGER"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__INTENTHANDLINGSTATUS", "INTEGER"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__IDENTIFIER", "INTEGER"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__PLAYING", "INTEGER"),
                ColumnSpec::new("Z_DKSEARCHFEEDBACKMETADATAKEY__INTERACTIONTYPE", "INTEGER"),
                ColumnSpec::new("Z_DKSEARCHFEEDBACKMETADATAKEY__SUGGESTIONTYPE", "INTEGER"),
                ColumnSpec::new("Z_DKSUNRISESUNSETMETADATAKEY__ISDAYLIGHT", "INTEGER"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__QUERYENGAGED", "INTEGER"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__RESULTENGAGED", "INTEGER"),
                ColumnSpec::new("ZCOM_APPLE_CALENDARUIKIT_USERACTIVITY_DATE", "INTEGER"),
                ColumnSpec::new("ZCOM_APPLE_CALENDARUIKIT_USERACTIVITY_ENDDATE", "INTEGER"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__DECAYRATE", "FLOAT"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__SCORE", "FLOAT"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__EXPIRATIONDATE", "TIMESTAMP"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__LATITUDE", "FLOAT"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__LONGITUDE", "FLOAT"),
                ColumnSpec::new("Z_DKLOCATIONMETADATAKEY__LATITUDE", "FLOAT"),
                ColumnSpec::new("Z_DKLOCATIONMETADATAKEY__LONGITUDE", "FLOAT"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__DURATION", "FLOAT"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__ELAPSED", "FLOAT"),
                ColumnSpec::new("Z_DKPERIODMETADATAKEY__PERIODEND", "TIMESTAMP"),
                ColumnSpec::new("Z_DKPERIODMETADATAKEY__PERIODSTART", "TIMESTAMP"),
                ColumnSpec::new("Z_DKSUNRISESUNSETMETADATAKEY__CURRENTSUNRISE", "TIMESTAMP"),
                ColumnSpec::new("Z_DKSUNRISESUNSETMETADATAKEY__CURRENTSUNSET", "TIMESTAMP"),
                ColumnSpec::new("Z_DKSUNRISESUNSETMETADATAKEY__NEXTSUNRISE", "TIMESTAMP"),
                ColumnSpec::new("Z_DKSUNRISESUNSETMETADATAKEY__NEXTSUNSET", "TIMESTAMP"),
                ColumnSpec::new("Z_DKSUNRISESUNSETMETADATAKEY__PREVIOUSSUNRISE", "TIMESTAMP"),
                ColumnSpec::new("Z_DKSUNRISESUNSETMETADATAKEY__PREVIOUSSUNSET", "TIMESTAMP"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__TIMESTAMP", "FLOAT"),
                ColumnSpec::new("Z_CDENTITYMETADATAKEY__BESTLANGUAGE", "VARCHAR"),
                ColumnSpec::new("Z_CDENTITYMETADATAKEY__NAME", "VARCHAR"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__OSBUILD", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPINSTALLMETADATAKEY__PRIMARYCATEGORY", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPINSTALLMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ACTIVITYTYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ITEMIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ITEMRELATEDUNIQUEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__USERACTIVITYREQUIREDSTRING", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__USERACTIVITYUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__BACKBOARDSTATE", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__EXTENSIONCONTAININGBUNDLEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__EXTENSIONHOSTIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__LAUNCHREASON", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__CHANNELS", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__DATASOURCES", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__IDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__PORTNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__PORTTYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__PREFERREDDATASOURCE", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__SELECTEDDATASOURCE", "VARCHAR"),
                ColumnSpec::new("Z_DKBATTERYSAVERMETADATAKEY__SOURCE", "VARCHAR"),
                ColumnSpec::new("Z_DKBLUETOOTHMETADATAKEY__ADDRESS", "VARCHAR"),
                ColumnSpec::new("Z_DKBLUETOOTHMETADATAKEY__NAME", "VARCHAR"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__FEED", "VARCHAR"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__MESSAGE", "VARCHAR"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__SUBTITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKCALENDARMETADATAKEY__INTERACTION", "VARCHAR"),
                ColumnSpec::new("Z_DKCALLMETADATAKEY__INTERACTION", "VARCHAR"),
                ColumnSpec::new("Z_DKDEVICEIDMETADATAKEY__DEVICEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__INTENTCLASS", "VARCHAR"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__INTENTVERB", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__URL", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__CITY", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__COUNTRY", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__DISPLAYNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__FULLYFORMATTEDADDRESS", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__LOCATIONNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__POSTALCODE_V2", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__STATEORPROVINCE", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__SUBTHOROUGHFARE", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__THOROUGHFARE", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONMETADATAKEY__IDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEAPPVIEW__HOMEUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEAPPVIEW__VIEWINFORMATION", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEAPPVIEW__VIEWNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEAPPVIEW__VIEWUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__ACCESSORYNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__ACCESSORYUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__CHARACTERISTICTYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__CLIENTNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__HOMEUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__SERVICENAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__SERVICETYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__ACTIONSETNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__ACTIONSETTYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__ACTIONSETUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__CLIENTNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__HOMEUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__SCENENAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMICROLOCATIONMETADATAKEY__LOCATIONDISTRIBUTION", "VARCHAR"),
                ColumnSpec::new("Z_DKMICROLOCATIONMETADATAKEY__MICROLOCATIONDISTRIBUTION", "VARCHAR"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__ALBUM", "VARCHAR"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__ARTIST", "VARCHAR"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__GENRE", "VARCHAR"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKSAFARIHISTORYMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKSEARCHFEEDBACKMETADATAKEY__CLIENT", "VARCHAR"),
                ColumnSpec::new("Z_DKSEARCHFEEDBACKMETADATAKEY__CONTACTID", "VARCHAR"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__QUERY", "VARCHAR"),
                ColumnSpec::new("ZCOM_APPLE_CALENDARUIKIT_USERACTIVITY_EXTERNALID", "VARCHAR"),
                ColumnSpec::new("ZKCDCSNOTIFICATIONOPTIONCLIENTIDENTIFIERKEY", "VARCHAR"),
                ColumnSpec::new("ZKCDCSNOTIFICATIONOPTIONCLIENTLAUNCHKEY", "VARCHAR"),
                ColumnSpec::new("ZKCDCSNOTIFICATIONOPTIONPERSISTENTPREDICATESTRINGKEY", "VARCHAR"),
                ColumnSpec::new("ZMETADATAHASH", "VARCHAR UNIQUE"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ITEMRELATEDCONTENTURL", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPINSTALLMETADATAKEY__SUBCATEGORIES", "BLOB"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__SERIALIZEDINTERACTION", "BLOB"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__PHONENUMBERS", "BLOB"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__CANDIDATELIST", "BLOB"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__QUERYLIST", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "Z_4EVENT",
            columns: &[
                ColumnSpec::new("Z_4CUSTOMMETADATA", "INTEGER"),
                ColumnSpec::new("Z_10EVENT", "INTEGER"),
            ],
            constraints: &[
                "PRIMARY KEY (Z_4CUSTOMMETADATA, Z_10EVENT)",
            ],
        },
        TableSpec {
            name: "Z_METADATA",
            columns: &[
                ColumnSpec::new("Z_VERSION", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_UUID", "VARCHAR(255)"),
                ColumnSpec::new("Z_PLIST", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "Z_MODELCACHE",
            columns: &[
                ColumnSpec::new("Z_CONTENT", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "Z_PRIMARYKEY",
            columns: &[
                ColumnSpec::new("Z_ENT", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_NAME", "VARCHAR"),
                ColumnSpec::new("Z_SUPER", "INTEGER"),
                ColumnSpec::new("Z_MAX", "INTEGER"),
            ],
            constraints: &[],
        },
    ],
};

/// KnowledgeC layout shipped with macOS 10.14.
pub static MACOS_10_14: SchemaFingerprint = SchemaFingerprint {
    name: "macos-10.14",
    tables: &[
        TableSpec {
            name: "ZADDITIONCHANGESET",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZSEQUENCENUMBER", "INTEGER"),
                ColumnSpec::new("ZVERSION", "INTEGER"),
                ColumnSpec::new("ZENDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZSTARTDATE", "TIMESTAMP"),
                ColumnSpec::new("ZCKFOREIGNKEY", "VARCHAR"),
                ColumnSpec::new("ZCKRECORDID", "VARCHAR"),
                ColumnSpec::new("ZDEVICEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZCHANGESET", "BLOB"),
                ColumnSpec::new("ZCKRECORDSYSTEMFIELDS", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZCONTEXTUALCHANGEREGISTRATION",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZCREATIONDATE", "TIMESTAMP"),
                ColumnSpec::new("ZIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZPROPERTIES", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZCONTEXTUALKEYPATH",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZDEVICEID", "INTEGER"),
                ColumnSpec::new("ZISEPHEMERAL", "INTEGER"),
                ColumnSpec::new("ZISUSERCENTRIC", "INTEGER"),
                ColumnSpec::new("ZCREATIONDATE", "TIMESTAMP"),
                ColumnSpec::new("ZLASTMODIFIEDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZKEY", "VARCHAR"),
                ColumnSpec::new("ZVALUE", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZCUSTOMMETADATA",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZINTEGERVALUE", "INTEGER"),
                ColumnSpec::new("ZOBJECT", "INTEGER"),
                ColumnSpec::new("Z9_OBJECT", "INTEGER"),
                ColumnSpec::new("ZDATEVALUE", "TIMESTAMP"),
                ColumnSpec::new("ZDOUBLEVALUE", "FLOAT"),
                ColumnSpec::new("ZNAME", "VARCHAR"),
                ColumnSpec::new("ZSTRINGVALUE", "VARCHAR"),
                ColumnSpec::new("ZVALUEHASH", "VARCHAR"),
                ColumnSpec::new("ZBINARYVALUE", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZDELETIONCHANGESET",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZSEQUENCENUMBER", "INTEGER"),
                ColumnSpec::new("ZVERSION", "INTEGER"),
                ColumnSpec::new("ZENDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZSTARTDATE", "TIMESTAMP"),
                ColumnSpec::new("ZCKFOREIGNKEY", "VARCHAR"),
                ColumnSpec::new("ZCKRECORDID", "VARCHAR"),
                ColumnSpec::new("ZDEVICEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZCHANGESET", "BLOB"),
                ColumnSpec::new("ZCKRECORDSYSTEMFIELDS", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZHISTOGRAM",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZSTREAMTYPECODE", "INTEGER"),
                ColumnSpec::new("ZENDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZSTARTDATE", "TIMESTAMP"),
                ColumnSpec::new("ZCUSTOMIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZDEVICEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("ZSTREAMNAME", "VARCHAR"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZHISTOGRAMVALUE",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZINTEGERVALUE", "INTEGER"),
                ColumnSpec::new("ZHISTOGRAM", "INTEGER"),
                ColumnSpec::new("ZCOUNT", "FLOAT"),
                ColumnSpec::new("ZSTRINGVALUE", "VARCHAR"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZKEYVALUE",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZDOMAIN", "VARCHAR"),
                ColumnSpec::new("ZKEY", "VARCHAR"),
                ColumnSpec::new("ZVALUE", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZOBJECT",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZUUIDHASH", "INTEGER"),
                ColumnSpec::new("ZEVENT", "INTEGER"),
                ColumnSpec::new("ZSOURCE", "INTEGER"),
                ColumnSpec::new("ZCATEGORYTYPE", "INTEGER"),
                ColumnSpec::new("ZINTEGERVALUE", "INTEGER"),
                ColumnSpec::new("ZENDDAYOFWEEK", "INTEGER"),
                ColumnSpec::new("ZENDSECONDOFDAY", "INTEGER"),
                ColumnSpec::new("ZHASCUSTOMMETADATA", "INTEGER"),
                ColumnSpec::new("ZHASSTRUCTUREDMETADATA", "INTEGER"),
                ColumnSpec::new("ZSECONDSFROMGMT", "INTEGER"),
                ColumnSpec::new("ZSHOULDSYNC", "INTEGER"),
                ColumnSpec::new("ZSTARTDAYOFWEEK", "INTEGER"),
                ColumnSpec::new("ZSTARTSECONDOFDAY", "INTEGER"),
                ColumnSpec::new("ZVALUECLASS", "INTEGER"),
                ColumnSpec::new("ZVALUEINTEGER", "INTEGER"),
                ColumnSpec::new("ZVALUETYPECODE", "INTEGER"),
                ColumnSpec::new("ZSTRUCTUREDMETADATA", "INTEGER"),
                ColumnSpec::new("ZVALUE", "INTEGER"),
                ColumnSpec::new("Z9_VALUE", "INTEGER"),
                ColumnSpec::new("ZIDENTIFIERTYPE", "INTEGER"),
                ColumnSpec::new("ZQUANTITYTYPE", "INTEGER"),
                ColumnSpec::new("ZOBJECT", "INTEGER"),
                ColumnSpec::new("Z9_OBJECT", "INTEGER"),
                ColumnSpec::new("ZSUBJECT", "INTEGER"),
                ColumnSpec::new("Z9_SUBJECT", "INTEGER"),
                ColumnSpec::new("ZCREATIONDATE", "TIMESTAMP"),
                ColumnSpec::new("ZLOCALCREATIONDATE", "TIMESTAMP"),
                ColumnSpec::new("ZCONFIDENCE", "FLOAT"),
                ColumnSpec::new("ZENDDATE", "TIMESTAMP"),
                ColumnSpec::new("ZSTARTDATE", "TIMESTAMP"),
                ColumnSpec::new("ZVALUEDOUBLE", "FLOAT"),
                ColumnSpec::new("ZDOUBLEVALUE", "FLOAT"),
                ColumnSpec::new("ZUUID", "VARCHAR"),
                ColumnSpec::new("ZSTREAMNAME", "VARCHAR"),
                ColumnSpec::new("ZVALUESTRING", "VARCHAR"),
                ColumnSpec::new("ZSTRING", "VARCHAR"),
                ColumnSpec::new("ZVERBPHRASE", "VARCHAR"),
                ColumnSpec::new("ZMETADATA", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZSOURCE",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZUSERID", "INTEGER"),
                ColumnSpec::new("ZBUNDLEID", "VARCHAR"),
                ColumnSpec::new("ZDEVICEID", "VARCHAR"),
                ColumnSpec::new("ZGROUPID", "VARCHAR"),
                ColumnSpec::new("ZITEMID", "VARCHAR"),
                ColumnSpec::new("ZSOURCEID", "VARCHAR"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZSTRUCTUREDMETADATA",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__ALGORITHM", "INTEGER"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__ASSETVERSION", "INTEGER"),
                ColumnSpec::new("Z_DKAPPINSTALLMETADATAKEY__ISINSTALL", "INTEGER"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ISELIGIBLEFORPREDICTION", "INTEGER"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ISPUBLICLYINDEXABLE", "INTEGER"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__PROCESSIDENTIFIER", "INTEGER"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__ROUTECHANGEREASON", "INTEGER"),
                ColumnSpec::new("Z_DKBLUETOOTHMETADATAKEY__DEVICETYPE", "INTEGER"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__HASDATE", "INTEGER"),
                ColumnSpec::new("Z_DKDIGITALHEALTHMETADATAKEY__USAGETYPE", "INTEGER"),
                ColumnSpec::new("Z_DKGLANCELAUNCHMETADATA__DEVICEIDENTIFIER", "INTEGER"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__DONATEDBYSIRI", "INTEGER"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__INTENTHANDLINGSTATUS", "INTEGER"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__INTENTTYPE", "INTEGER"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__IDENTIFIER", "INTEGER"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__PLAYING", "INTEGER"),
                ColumnSpec::new("Z_DKSEARCHFEEDBACKMETADATAKEY__INTERACTIONTYPE", "INTEGER"),
                ColumnSpec::new("Z_DKSEARCHFEEDBACKMETADATAKEY__SUGGESTIONTYPE", "INTEGER"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__QUERYENGAGED", "INTEGER"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__RESULTENGAGED", "INTEGER"),
                ColumnSpec::new("ZCOM_APPLE_CALENDARUIKIT_USERACTIVITY_DATE", "INTEGER"),
                ColumnSpec::new("ZCOM_APPLE_CALENDARUIKIT_USERACTIVITY_ENDDATE", "INTEGER"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__DECAYRATE", "FLOAT"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__SCORE", "FLOAT"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__EXPIRATIONDATE", "TIMESTAMP"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__LATITUDE", "FLOAT"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__LONGITUDE", "FLOAT"),
                ColumnSpec::new("Z_DKLOCATIONMETADATAKEY__LATITUDE", "FLOAT"),
                ColumnSpec::new("Z_DKLOCATIONMETADATAKEY__LONGITUDE", "FLOAT"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__DURATION", "FLOAT"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__ELAPSED", "FLOAT"),
                ColumnSpec::new("Z_DKPERIODMETADATAKEY__PERIODEND", "TIMESTAMP"),
                ColumnSpec::new("Z_DKPERIODMETADATAKEY__PERIODSTART", "TIMESTAMP"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__TIMESTAMP", "FLOAT"),
                ColumnSpec::new("Z_CDENTITYMETADATAKEY__BESTLANGUAGE", "VARCHAR"),
                ColumnSpec::new("Z_CDENTITYMETADATAKEY__NAME", "VARCHAR"),
                ColumnSpec::new("Z_CDPORTRAITMETADATAKEY__OSBUILD", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPINSTALLMETADATAKEY__PRIMARYCATEGORY", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPINSTALLMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ACTIVITYTYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__CONTENTDESCRIPTION", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ITEMIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ITEMRELATEDUNIQUEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__SUGGESTEDINVOCATIONPHRASE", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__USERACTIVITYREQUIREDSTRING", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__USERACTIVITYUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__BACKBOARDSTATE", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__EXTENSIONCONTAININGBUNDLEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__EXTENSIONHOSTIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONMETADATAKEY__LAUNCHREASON", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__CHANNELS", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__DATASOURCES", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__IDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__PORTNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__PORTTYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__PREFERREDDATASOURCE", "VARCHAR"),
                ColumnSpec::new("Z_DKAUDIOMETADATAKEY__SELECTEDDATASOURCE", "VARCHAR"),
                ColumnSpec::new("Z_DKBATTERYSAVERMETADATAKEY__SOURCE", "VARCHAR"),
                ColumnSpec::new("Z_DKBLUETOOTHMETADATAKEY__ADDRESS", "VARCHAR"),
                ColumnSpec::new("Z_DKBLUETOOTHMETADATAKEY__NAME", "VARCHAR"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__FEED", "VARCHAR"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__MESSAGE", "VARCHAR"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__SUBTITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKBULLETINBOARDMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKCALENDARMETADATAKEY__INTERACTION", "VARCHAR"),
                ColumnSpec::new("Z_DKCALLMETADATAKEY__INTERACTION", "VARCHAR"),
                ColumnSpec::new("Z_DKDEVICEIDMETADATAKEY__DEVICEIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKDIGITALHEALTHMETADATAKEY__WEBDOMAIN", "VARCHAR"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__INTENTCLASS", "VARCHAR"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__INTENTVERB", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__URL", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__CITY", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__COUNTRY", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__DISPLAYNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__FULLYFORMATTEDADDRESS", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__LOCATIONNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__POSTALCODE_V2", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__STATEORPROVINCE", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__SUBTHOROUGHFARE", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__THOROUGHFARE", "VARCHAR"),
                ColumnSpec::new("Z_DKLOCATIONMETADATAKEY__IDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEAPPVIEW__HOMEUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEAPPVIEW__VIEWINFORMATION", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEAPPVIEW__VIEWNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEAPPVIEW__VIEWUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__ACCESSORYNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__ACCESSORYUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__CHARACTERISTICTYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__CLIENTNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__HOMEUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__SERVICENAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITACCESSORYCONTROL__SERVICETYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__ACTIONSETNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__ACTIONSETTYPE", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__ACTIONSETUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__CLIENTNAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__HOMEUUID", "VARCHAR"),
                ColumnSpec::new("Z_DKMETADATAHOMEKITSCENE__SCENENAME", "VARCHAR"),
                ColumnSpec::new("Z_DKMICROLOCATIONMETADATAKEY__LOCATIONDISTRIBUTION", "VARCHAR"),
                ColumnSpec::new("Z_DKMICROLOCATIONMETADATAKEY__MICROLOCATIONDISTRIBUTION", "VARCHAR"),
                ColumnSpec::new("Z_DKNOTIFICATIONUSAGEMETADATAKEY__BUNDLEID", "VARCHAR"),
                ColumnSpec::new("Z_DKNOTIFICATIONUSAGEMETADATAKEY__IDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__ALBUM", "VARCHAR"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__ARTIST", "VARCHAR"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__GENRE", "VARCHAR"),
                ColumnSpec::new("Z_DKNOWPLAYINGMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKRELEVANTSHORTCUTMETADATAKEY__KEYIMAGEPROXYIDENTIFIER", "VARCHAR"),
                ColumnSpec::new("Z_DKSAFARIHISTORYMETADATAKEY__TITLE", "VARCHAR"),
                ColumnSpec::new("Z_DKSEARCHFEEDBACKMETADATAKEY__CLIENT", "VARCHAR"),
                ColumnSpec::new("Z_DKSEARCHFEEDBACKMETADATAKEY__CONTACTID", "VARCHAR"),
                ColumnSpec::new("Z_DKTOMBSTONEMETADATAKEY__EVENTSOURCEDEVICEID", "VARCHAR"),
                ColumnSpec::new("Z_DKTOMBSTONEMETADATAKEY__EVENTSTREAMNAME", "VARCHAR"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__QUERY", "VARCHAR"),
                ColumnSpec::new("ZCOM_APPLE_CALENDARUIKIT_USERACTIVITY_EXTERNALID", "VARCHAR"),
                ColumnSpec::new("ZKCDCSNOTIFICATIONOPTIONCLIENTIDENTIFIERKEY", "VARCHAR"),
                ColumnSpec::new("ZKCDCSNOTIFICATIONOPTIONCLIENTLAUNCHKEY", "VARCHAR"),
                ColumnSpec::new("ZKCDCSNOTIFICATIONOPTIONPERSISTENTPREDICATESTRINGKEY", "VARCHAR"),
                ColumnSpec::new("ZMETADATAHASH", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPLICATIONACTIVITYMETADATAKEY__ITEMRELATEDCONTENTURL", "VARCHAR"),
                ColumnSpec::new("Z_DKDIGITALHEALTHMETADATAKEY__WEBPAGEURL", "VARCHAR"),
                ColumnSpec::new("Z_DKAPPINSTALLMETADATAKEY__SUBCATEGORIES", "BLOB"),
                ColumnSpec::new("Z_DKINTENTMETADATAKEY__SERIALIZEDINTERACTION", "BLOB"),
                ColumnSpec::new("Z_DKLOCATIONAPPLICATIONACTIVITYMETADATAKEY__PHONENUMBERS", "BLOB"),
                ColumnSpec::new("Z_DKRELEVANTSHORTCUTMETADATAKEY__SERIALIZEDRELEVANTSHORTCUT", "BLOB"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__CANDIDATELIST", "BLOB"),
                ColumnSpec::new("Z_QPMETRICSMETADATAKEY__QUERYLIST", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "ZSYNCPEER",
            columns: &[
                ColumnSpec::new("Z_PK", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_ENT", "INTEGER"),
                ColumnSpec::new("Z_OPT", "INTEGER"),
                ColumnSpec::new("ZCLOUDID", "VARCHAR"),
                ColumnSpec::new("ZDEVICEID", "VARCHAR"),
                ColumnSpec::new("ZRAPPORTID", "VARCHAR"),
                ColumnSpec::new("ZUUID", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "Z_4EVENT",
            columns: &[
                ColumnSpec::new("Z_4CUSTOMMETADATA", "INTEGER"),
                ColumnSpec::new("Z_11EVENT", "INTEGER"),
            ],
            constraints: &[
                "PRIMARY KEY (Z_4CUSTOMMETADATA, Z_11EVENT)",
            ],
        },
        TableSpec {
            name: "Z_METADATA",
            columns: &[
                ColumnSpec::new("Z_VERSION", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_UUID", "VARCHAR(255)"),
                ColumnSpec::new("Z_PLIST", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "Z_MODELCACHE",
            columns: &[
                ColumnSpec::new("Z_CONTENT", "BLOB"),
            ],
            constraints: &[],
        },
        TableSpec {
            name: "Z_PRIMARYKEY",
            columns: &[
                ColumnSpec::new("Z_ENT", "INTEGER PRIMARY KEY"),
                ColumnSpec::new("Z_NAME", "VARCHAR"),
                ColumnSpec::new("Z_SUPER", "INTEGER"),
                ColumnSpec::new("Z_MAX", "INTEGER"),
            ],
            constraints: &[],
        },
    ],
};
