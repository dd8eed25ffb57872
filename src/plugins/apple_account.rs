//! Apple ID authentication property list
//! (`com.apple.coreservices.appleidauthenticationinfo.*.plist`).
//!
//! Each entry under `Accounts` is one account. Up to three events are
//! emitted per account, one for each date field that is present.

use crate::core::classifier::FieldRule;
use crate::core::document::DocumentRecord;
use crate::core::emitter::{Emitter, TimeCandidate};
use crate::core::event::{AccountConfiguration, EventData, TimeLabel};
use crate::core::plugin::DocumentPlugin;
use crate::util::constants::{
    APPLE_ACCOUNTS_KEY, APPLE_ACCOUNTS_ROOT, APPLE_ACCOUNT_PLIST_PREFIX, FIRST_NAME_PLACEHOLDER,
    LAST_NAME_PLACEHOLDER,
};
use crate::util::error::Result;

const REQUIRED_KEYS: &[&str] = &["AuthCertificates", "AccessorVersions", APPLE_ACCOUNTS_KEY];

const DATE_FIELDS: &[FieldRule] = &[
    FieldRule::new("CreationDate", TimeLabel::Configured),
    FieldRule::new("LastSuccessfulConnect", TimeLabel::Connected),
    FieldRule::new("ValidationDate", TimeLabel::Validated),
];

/// Document plugin for Apple account information.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppleAccountPlugin;

impl DocumentPlugin for AppleAccountPlugin {
    fn name(&self) -> &'static str {
        "apple_id"
    }

    fn applies_to(&self, document_name: &str) -> bool {
        document_name.starts_with(APPLE_ACCOUNT_PLIST_PREFIX)
    }

    fn required_keys(&self) -> &'static [&'static str] {
        REQUIRED_KEYS
    }

    fn entries_key(&self) -> &'static str {
        APPLE_ACCOUNTS_KEY
    }

    fn handle_entry(&self, entry: &DocumentRecord<'_>, emitter: &mut Emitter<'_>) -> Result<()> {
        let data = EventData::AppleAccount(AccountConfiguration {
            key: entry.name().to_string(),
            root: APPLE_ACCOUNTS_ROOT.to_string(),
            first_name: entry.text_or("FirstName", FIRST_NAME_PLACEHOLDER)?,
            last_name: entry.text_or("LastName", LAST_NAME_PLACEHOLDER)?,
        });

        let candidates = DATE_FIELDS
            .iter()
            .map(|rule| TimeCandidate::from_date(rule.label, rule.key, entry.date(rule.key)));
        emitter.emit(data, candidates)?;
        Ok(())
    }
}
