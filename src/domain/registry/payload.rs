//! Registry response envelopes and field mapping.
//!
//! Registry payloads are deeply nested and partially populated: whole
//! sub-records (trading name, GST registration, physical address) are
//! routinely absent. Every field here is therefore `Option` and deserialized
//! with defaults, so a missing branch at any depth becomes `None` instead of
//! a fault and never aborts mapping of sibling fields.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::entities::BusinessEntity;
use crate::error::AbrError;

/// A scalar the registry spells as either a string or a bare number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Text {
    String(String),
    Number(i64),
}

impl Text {
    fn into_string(self) -> String {
        match self {
            Text::String(s) => s,
            Text::Number(n) => n.to_string(),
        }
    }
}

/// A boolean flag the registry spells as either a JSON bool or `"Y"` / `"N"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn as_bool(&self) -> bool {
        match self {
            Flag::Bool(b) => *b,
            Flag::Text(t) => matches!(t.trim(), "Y" | "y" | "true" | "True" | "TRUE" | "1"),
        }
    }
}

/// A list element the registry flattens to a bare object when there is
/// exactly one result.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AbnRecord {
    pub identifier_value: Option<Text>,
    pub is_current_indicator: Option<Flag>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntityTypeRecord {
    pub entity_description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct EntityStatusRecord {
    pub entity_status_code: Option<String>,
    pub effective_from: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrganisationName {
    pub organisation_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PersonName {
    pub given_name: Option<String>,
    pub family_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PhysicalAddress {
    pub state_code: Option<String>,
    pub postcode: Option<Text>,
    pub effective_from: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GstRecord {
    pub effective_from: Option<String>,
}

/// The registry's exception branch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExceptionPayload {
    pub exception_description: Option<String>,
    pub exception_code: Option<String>,
}

/// One business entity record as the registry returns it.
///
/// Used both for single-record searches and for each candidate record of a
/// name search; the name-search shape is a subset with the same field names.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BusinessEntityPayload {
    pub asic_number: Option<Text>,
    pub abn: Option<AbnRecord>,
    pub entity_type: Option<EntityTypeRecord>,
    pub entity_status: Option<EntityStatusRecord>,
    pub main_name: Option<OrganisationName>,
    pub main_trading_name: Option<OrganisationName>,
    pub business_name: Option<OrganisationName>,
    pub legal_name: Option<PersonName>,
    pub full_name: Option<String>,
    pub other_trading_name: Option<OrganisationName>,
    pub main_business_physical_address: Option<PhysicalAddress>,
    pub record_last_updated_date: Option<String>,
    pub goods_and_services_tax: Option<GstRecord>,
}

impl BusinessEntityPayload {
    /// Replaces all mapped fields of `entity` from this payload.
    ///
    /// Enrichment is all-or-nothing: every mapped field is overwritten,
    /// including with `None` when the corresponding branch is absent. The
    /// derived name snapshots are recomputed afterwards.
    pub fn apply_to(self, entity: &mut BusinessEntity) {
        entity.acn = self.asic_number.map(Text::into_string);
        entity.abn = self
            .abn
            .as_ref()
            .and_then(|a| a.identifier_value.clone())
            .map(Text::into_string);
        entity.abn_current = self
            .abn
            .and_then(|a| a.is_current_indicator)
            .map(|f| f.as_bool());
        entity.entity_type = self.entity_type.and_then(|t| t.entity_description);
        entity.status = self
            .entity_status
            .as_ref()
            .and_then(|s| s.entity_status_code.clone());
        entity.main_name = self.main_name.and_then(|n| n.organisation_name);
        entity.trading_name = self.main_trading_name.and_then(|n| n.organisation_name);
        entity.business_name = self.business_name.and_then(|n| n.organisation_name);
        entity.legal_name = self.legal_name.and_then(compose_legal_name);
        entity.legal_name2 = self.full_name;
        entity.other_trading_name = self.other_trading_name.and_then(|n| n.organisation_name);
        entity.active_from_date = self.entity_status.and_then(|s| s.effective_from);
        entity.address_state_code = self
            .main_business_physical_address
            .as_ref()
            .and_then(|a| a.state_code.clone());
        entity.address_post_code = self
            .main_business_physical_address
            .as_ref()
            .and_then(|a| a.postcode.clone())
            .map(Text::into_string);
        entity.address_from_date = self
            .main_business_physical_address
            .and_then(|a| a.effective_from);
        entity.last_updated = self.record_last_updated_date;
        entity.gst_from_date = self.goods_and_services_tax.and_then(|g| g.effective_from);

        entity.refresh_derived_names();
    }

    /// Builds a fresh entity from this payload.
    pub fn into_entity(self) -> BusinessEntity {
        let mut entity = BusinessEntity::default();
        self.apply_to(&mut entity);
        entity
    }
}

/// Joins the present components of a person name with a single space.
///
/// A record with neither component maps to `None` rather than an empty
/// string, so it never pollutes the name candidate list.
fn compose_legal_name(name: PersonName) -> Option<String> {
    let parts: Vec<String> = [name.given_name, name.family_name]
        .into_iter()
        .flatten()
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}

/// Records returned by an advanced name search.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SearchResultsList {
    pub num_records_found: Option<Text>,
    pub search_results_record: Option<OneOrMany<BusinessEntityPayload>>,
}

/// The `response` node shared by all registry operations.
///
/// Exactly one of the branches is populated: a single business entity, a
/// name-search result list, or the exception branch.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ResponseEnvelope {
    #[serde(alias = "business_entity201408")]
    pub business_entity: Option<BusinessEntityPayload>,
    pub search_results_list: Option<SearchResultsList>,
    pub exception: Option<ExceptionPayload>,
}

impl ResponseEnvelope {
    /// Unwraps a raw registry response down to its `response` node.
    ///
    /// # Errors
    ///
    /// Returns [`AbrError::UnexpectedResponse`] when the enclosing
    /// `abr_payload_search_results.response` path is missing or the node does
    /// not deserialize.
    pub fn from_raw(raw: Value) -> Result<Self, AbrError> {
        let response = raw
            .get("abr_payload_search_results")
            .and_then(|v| v.get("response"))
            .cloned()
            .ok_or_else(|| {
                AbrError::unexpected("missing abr_payload_search_results.response node")
            })?;

        serde_json::from_value(response)
            .map_err(|e| AbrError::unexpected(format!("undecodable response node: {e}")))
    }

    /// Extracts the single business entity of an ABN/ACN search.
    ///
    /// # Errors
    ///
    /// Returns [`AbrError::Remote`] carrying the registry's exception
    /// description when the entity branch is absent.
    pub fn into_single(self) -> Result<BusinessEntityPayload, AbrError> {
        match self.business_entity {
            Some(payload) => Ok(payload),
            None => Err(remote_error(self.exception)),
        }
    }

    /// Extracts the candidate records of a name search.
    ///
    /// A present result list with zero records is a successful empty search;
    /// an absent result list means the registry raised an exception.
    ///
    /// # Errors
    ///
    /// Returns [`AbrError::Remote`] when the result list branch is absent.
    pub fn into_candidates(self) -> Result<Vec<BusinessEntityPayload>, AbrError> {
        match self.search_results_list {
            Some(list) => Ok(list
                .search_results_record
                .map(OneOrMany::into_vec)
                .unwrap_or_default()),
            None => Err(remote_error(self.exception)),
        }
    }
}

fn remote_error(exception: Option<ExceptionPayload>) -> AbrError {
    match exception.and_then(|e| e.exception_description) {
        Some(description) => AbrError::remote(description),
        None => AbrError::unexpected("response carried neither a result nor an exception"),
    }
}
