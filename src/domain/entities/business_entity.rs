//! Business entity record enriched from registry lookups.

use crate::domain::identifiers::{abn::ABN_LENGTH, acn::ACN_LENGTH};
use crate::utils::normalizer::normalize_identifier;

/// The enriched business-identity record.
///
/// Every descriptive field is optional: the registry routinely omits whole
/// sub-records (no trading name, no GST registration, no physical address),
/// and absence must never prevent construction. Identifiers held here are
/// normalized but not necessarily valid; validity is checked at lookup time.
///
/// `primary_name` and `secondary_name` are stored snapshots of the derivation
/// implemented by [`BusinessEntity::names`]; they are recomputed whenever the
/// mapped fields are replaced by an enrichment call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusinessEntity {
    pub acn: Option<String>,
    pub abn: Option<String>,
    /// Whether this is the entity's current ABN.
    pub abn_current: Option<bool>,
    pub entity_type: Option<String>,
    pub status: Option<String>,
    pub main_name: Option<String>,
    pub trading_name: Option<String>,
    pub business_name: Option<String>,
    /// Composed from the registry's given + family name components.
    pub legal_name: Option<String>,
    /// Alternate full-name field used for individuals and sole traders.
    pub legal_name2: Option<String>,
    pub other_trading_name: Option<String>,
    pub active_from_date: Option<String>,
    pub address_state_code: Option<String>,
    pub address_post_code: Option<String>,
    pub address_from_date: Option<String>,
    pub last_updated: Option<String>,
    pub gst_from_date: Option<String>,
    pub primary_name: Option<String>,
    pub secondary_name: Option<String>,
}

impl BusinessEntity {
    /// Creates an entity from a raw ABN, normalizing it.
    ///
    /// The ABN is not validated here; lookups validate before dispatch.
    pub fn from_abn(raw: impl ToString) -> Self {
        Self {
            abn: Some(normalize_identifier(&raw.to_string(), ABN_LENGTH)),
            ..Self::default()
        }
    }

    /// Creates an entity from a raw ACN, normalizing it.
    pub fn from_acn(raw: impl ToString) -> Self {
        Self {
            acn: Some(normalize_identifier(&raw.to_string(), ACN_LENGTH)),
            ..Self::default()
        }
    }

    /// Returns the candidate business names in precedence order.
    ///
    /// Absent fields are skipped; the order is `main_name`, `business_name`,
    /// `trading_name`, `other_trading_name`, `legal_name`, `legal_name2`.
    pub fn names(&self) -> Vec<&str> {
        [
            self.main_name.as_deref(),
            self.business_name.as_deref(),
            self.trading_name.as_deref(),
            self.other_trading_name.as_deref(),
            self.legal_name.as_deref(),
            self.legal_name2.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    /// Derives the primary business name: the first candidate, if any.
    pub fn derive_primary_name(&self) -> Option<String> {
        self.names().first().map(|n| n.to_string())
    }

    /// Derives a relevant secondary name.
    ///
    /// The first candidate that does not case-insensitively contain the
    /// primary name as a substring; absent when no candidate qualifies or
    /// there is no primary name.
    pub fn derive_secondary_name(&self) -> Option<String> {
        let primary = self.derive_primary_name()?.to_lowercase();
        self.names()
            .into_iter()
            .find(|n| !n.to_lowercase().contains(&primary))
            .map(|n| n.to_string())
    }

    /// Recomputes the stored `primary_name` / `secondary_name` snapshots.
    ///
    /// Called after every enrichment; enrichment replaces all mapped fields
    /// at once, so the snapshots always agree with the mapped state.
    pub fn refresh_derived_names(&mut self) {
        self.primary_name = self.derive_primary_name();
        self.secondary_name = self.derive_secondary_name();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_abn_normalizes() {
        let entity = BusinessEntity::from_abn(" 99 12 439 10 73 ");
        assert_eq!(entity.abn.as_deref(), Some("99124391073"));
        assert!(entity.acn.is_none());
        assert!(entity.main_name.is_none());
    }

    #[test]
    fn test_from_acn_normalizes_integer_input() {
        let entity = BusinessEntity::from_acn(124391073u64);
        assert_eq!(entity.acn.as_deref(), Some("124391073"));
    }

    #[test]
    fn test_names_skips_absent_and_preserves_order() {
        let entity = BusinessEntity {
            main_name: Some("A".into()),
            business_name: Some("B".into()),
            trading_name: None,
            other_trading_name: Some("C".into()),
            ..BusinessEntity::default()
        };
        assert_eq!(entity.names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_primary_name_is_first_candidate() {
        let entity = BusinessEntity {
            business_name: Some("Acme Pty Ltd".into()),
            legal_name: Some("Jane Doe".into()),
            ..BusinessEntity::default()
        };
        assert_eq!(entity.derive_primary_name().as_deref(), Some("Acme Pty Ltd"));
    }

    #[test]
    fn test_primary_name_absent_when_no_names() {
        let entity = BusinessEntity::default();
        assert!(entity.derive_primary_name().is_none());
        assert!(entity.derive_secondary_name().is_none());
    }

    #[test]
    fn test_secondary_name_skips_candidates_containing_primary() {
        let entity = BusinessEntity {
            main_name: Some("Sony".into()),
            business_name: Some("SONY Corp".into()),
            trading_name: Some("Acme".into()),
            ..BusinessEntity::default()
        };
        assert_eq!(entity.derive_secondary_name().as_deref(), Some("Acme"));
    }

    #[test]
    fn test_secondary_name_absent_when_all_contain_primary() {
        let entity = BusinessEntity {
            main_name: Some("Sony".into()),
            trading_name: Some("Sony Australia".into()),
            ..BusinessEntity::default()
        };
        assert!(entity.derive_secondary_name().is_none());
    }

    #[test]
    fn test_refresh_derived_names() {
        let mut entity = BusinessEntity {
            main_name: Some("Main".into()),
            trading_name: Some("Side".into()),
            ..BusinessEntity::default()
        };
        entity.refresh_derived_names();
        assert_eq!(entity.primary_name.as_deref(), Some("Main"));
        assert_eq!(entity.secondary_name.as_deref(), Some("Side"));
    }
}
