//! Registry lookup orchestration.

use std::sync::Arc;

use serde_json::{Value, json};

use crate::config::AbrConfig;
use crate::domain::entities::BusinessEntity;
use crate::domain::identifiers::{Abn, Acn};
use crate::domain::registry::{
    OP_SEARCH_BY_ABN, OP_SEARCH_BY_ASIC, OP_SEARCH_BY_NAME, RegistryApi, ResponseEnvelope,
};
use crate::error::AbrError;

/// The eight Australian states and territories recognized by the registry.
pub const ALL_STATES: [&str; 8] = ["NSW", "QLD", "VIC", "SA", "WA", "TAS", "ACT", "NT"];

/// Options for an advanced name search.
///
/// Defaults match the registry's documented search behavior: all states, all
/// name types, `"Typical"` width, score floor 50, at most 10 results.
#[derive(Debug, Clone)]
pub struct NameSearchOptions {
    /// State codes to include in the search.
    pub states: Vec<String>,
    /// Include trading names in the search.
    pub trading_name: bool,
    /// Include legal names in the search.
    pub legal_name: bool,
    /// Include registered business names in the search.
    pub business_name: bool,
    /// Optional postcode filter.
    pub postcode: Option<String>,
    /// Search breadth mode, `"Typical"` or `"Narrow"`.
    pub search_width: String,
    /// Minimum match score, 0-100.
    pub minimum_score: u8,
    /// Maximum number of candidate records returned.
    pub max_search_results: u32,
    /// Skip the per-candidate re-lookup by ABN.
    ///
    /// Candidates come back in the name-search payload shape, which is
    /// sparser than the single-record shape; by default each candidate is
    /// re-fetched by ABN so its fields reflect the authoritative record, at
    /// the cost of one extra registry call per candidate.
    pub skip_reenrichment: bool,
}

impl Default for NameSearchOptions {
    fn default() -> Self {
        Self {
            states: ALL_STATES.iter().map(|s| s.to_string()).collect(),
            trading_name: true,
            legal_name: true,
            business_name: true,
            postcode: None,
            search_width: "Typical".to_string(),
            minimum_score: 50,
            max_search_results: 10,
            skip_reenrichment: false,
        }
    }
}

/// Service orchestrating registry lookups.
///
/// Holds its own configuration, so multiple services with different
/// credentials coexist safely. Input validation and the credential check both
/// happen before any registry call is dispatched.
pub struct LookupService<R: RegistryApi> {
    registry: Arc<R>,
    config: AbrConfig,
}

impl<R: RegistryApi> LookupService<R> {
    /// Creates a new lookup service.
    pub fn new(registry: Arc<R>, config: AbrConfig) -> Self {
        Self { registry, config }
    }

    /// Looks up a single business entity by ABN.
    ///
    /// # Errors
    ///
    /// Returns [`AbrError::InvalidArgument`] if the ABN fails its checksum and
    /// [`AbrError::Configuration`] if no GUID is configured; in both cases no
    /// registry call is made. Returns [`AbrError::Remote`] when the registry
    /// answers with an exception payload.
    pub async fn search_by_abn(&self, raw: impl ToString) -> Result<BusinessEntity, AbrError> {
        let abn = Abn::new(raw);
        if !abn.is_valid() {
            return Err(AbrError::invalid_argument(format!(
                "ABN {} is invalid",
                abn.as_str()
            )));
        }
        let guid = self.config.require_guid()?;

        let message = json!({
            "authenticationGuid": guid,
            "searchString": abn.as_str(),
            "includeHistoricalDetails": "N",
        });

        tracing::debug!(abn = abn.as_str(), "dispatching ABN search");
        let raw = self.registry.call(OP_SEARCH_BY_ABN, message).await?;
        let payload = ResponseEnvelope::from_raw(raw)?.into_single()?;
        Ok(payload.into_entity())
    }

    /// Looks up a single business entity by ACN (ASIC search).
    ///
    /// Same error contract as [`Self::search_by_abn`], validated with the ACN
    /// checksum.
    pub async fn search_by_acn(&self, raw: impl ToString) -> Result<BusinessEntity, AbrError> {
        let acn = Acn::new(raw);
        if !acn.is_valid() {
            return Err(AbrError::invalid_argument(format!(
                "ACN {} is invalid",
                acn.as_str()
            )));
        }
        let guid = self.config.require_guid()?;

        let message = json!({
            "authenticationGuid": guid,
            "searchString": acn.as_str(),
            "includeHistoricalDetails": "N",
        });

        tracing::debug!(acn = acn.as_str(), "dispatching ASIC search");
        let raw = self.registry.call(OP_SEARCH_BY_ASIC, message).await?;
        let payload = ResponseEnvelope::from_raw(raw)?.into_single()?;
        Ok(payload.into_entity())
    }

    /// Re-enriches an entity in place from its stored ABN.
    ///
    /// All mapped fields are replaced at once; on error the entity is left
    /// untouched.
    pub async fn enrich_by_abn(&self, entity: &mut BusinessEntity) -> Result<(), AbrError> {
        let abn = entity
            .abn
            .clone()
            .ok_or_else(|| AbrError::invalid_argument("entity has no ABN to enrich from"))?;
        *entity = self.search_by_abn(abn).await?;
        Ok(())
    }

    /// Re-enriches an entity in place from its stored ACN.
    pub async fn enrich_by_acn(&self, entity: &mut BusinessEntity) -> Result<(), AbrError> {
        let acn = entity
            .acn
            .clone()
            .ok_or_else(|| AbrError::invalid_argument("entity has no ACN to enrich from"))?;
        *entity = self.search_by_acn(acn).await?;
        Ok(())
    }

    /// Searches the registry by name, returning candidate entities.
    ///
    /// Unless [`NameSearchOptions::skip_reenrichment`] is set, each candidate
    /// is immediately re-fetched by ABN; a failure anywhere aborts the whole
    /// search rather than producing partial results.
    ///
    /// # Errors
    ///
    /// Returns [`AbrError::InvalidArgument`] for a blank search term and
    /// [`AbrError::Configuration`] if no GUID is configured, both before any
    /// registry call. Returns [`AbrError::Remote`] when the registry answers
    /// with an exception payload.
    pub async fn search_by_name(
        &self,
        name: &str,
        options: &NameSearchOptions,
    ) -> Result<Vec<BusinessEntity>, AbrError> {
        if name.trim().is_empty() {
            return Err(AbrError::invalid_argument("no search string provided"));
        }
        let guid = self.config.require_guid()?;

        let message = name_search_message(guid, name, options);

        tracing::debug!(name, "dispatching name search");
        let raw = self.registry.call(OP_SEARCH_BY_NAME, message).await?;
        let candidates = ResponseEnvelope::from_raw(raw)?.into_candidates()?;

        tracing::debug!(count = candidates.len(), "name search returned candidates");
        let mut entities = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let mut entity = candidate.into_entity();
            if !options.skip_reenrichment {
                self.enrich_by_abn(&mut entity).await?;
            }
            entities.push(entity);
        }
        Ok(entities)
    }
}

fn yes_no(included: bool) -> &'static str {
    if included { "Y" } else { "N" }
}

/// Builds the advanced name-search message the registry expects.
fn name_search_message(guid: &str, name: &str, options: &NameSearchOptions) -> Value {
    let state_codes: serde_json::Map<String, Value> = ALL_STATES
        .iter()
        .map(|state| {
            let included = options.states.iter().any(|s| s == state);
            (state.to_string(), Value::from(yes_no(included)))
        })
        .collect();

    json!({
        "externalNameSearch": {
            "authenticationGuid": guid,
            "name": name,
            "filters": {
                "nameType": {
                    "tradingName": yes_no(options.trading_name),
                    "legalName": yes_no(options.legal_name),
                    "businessName": yes_no(options.business_name),
                },
                "postcode": options.postcode,
                "stateCode": state_codes,
            },
            "searchWidth": options.search_width,
            "minimumScore": options.minimum_score,
            "maxSearchResults": options.max_search_results,
        },
        "authenticationGuid": guid,
    })
}
