use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::item::{self, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
use crate::error::AppError;

pub const DEFAULT_LIMIT: u64 = 10;
/// Largest `skip`/`limit` the database driver can bind (a signed 64-bit integer).
pub const MAX_PAGE_PARAM: u64 = i64::MAX as u64;

/// Input shape for create and update.
///
/// Update replaces every mutable field: omitted optional fields fall back to
/// the defaults below rather than keeping the stored value.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct ItemRequest {
    /// Unique item name (1-100 characters, surrounding whitespace trimmed).
    #[schema(example = "Widget")]
    pub name: String,
    /// Free-form description (at most 255 characters).
    #[serde(default)]
    #[schema(example = "A very useful widget")]
    pub description: Option<String>,
    #[schema(example = 10.99)]
    pub price: f64,
    /// Defaults to `true` when omitted.
    #[serde(default = "default_is_available")]
    pub is_available: bool,
    /// Defaults to `0` when omitted.
    #[serde(default)]
    pub stock_quantity: i32,
}

fn default_is_available() -> bool {
    true
}

/// Output shape: the stored item including server-assigned fields.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub is_available: bool,
    pub stock_quantity: i32,
    pub created_at: DateTime<Utc>,
    /// `null` until the item is first updated.
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ItemListQuery {
    /// Number of items to skip (default 0, at most 2^63 - 1).
    pub skip: Option<u64>,
    /// Maximum number of items to return (default 10, 1 to 2^63 - 1).
    pub limit: Option<u64>,
}

impl From<item::Model> for ItemResponse {
    fn from(m: item::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            price: m.price,
            is_available: m.is_available,
            stock_quantity: m.stock_quantity,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

pub fn validate_item(req: &ItemRequest) -> Result<(), AppError> {
    let name = req.name.trim();
    if name.is_empty() || name.chars().count() > NAME_MAX_LEN {
        return Err(AppError::Validation(format!(
            "name must be 1-{NAME_MAX_LEN} characters"
        )));
    }
    if let Some(ref desc) = req.description
        && desc.chars().count() > DESCRIPTION_MAX_LEN
    {
        return Err(AppError::Validation(format!(
            "description must be at most {DESCRIPTION_MAX_LEN} characters"
        )));
    }
    if !req.price.is_finite() {
        return Err(AppError::Validation("price must be a finite number".into()));
    }
    Ok(())
}

/// Validate a create batch (non-empty, every entry valid). Errors carry the
/// index of the offending entry.
pub fn validate_batch(items: &[ItemRequest]) -> Result<(), AppError> {
    if items.is_empty() {
        return Err(AppError::Validation("items must not be empty".into()));
    }
    for (idx, req) in items.iter().enumerate() {
        validate_item(req).map_err(|e| match e {
            AppError::Validation(msg) => AppError::Validation(format!("items[{idx}]: {msg}")),
            other => other,
        })?;
    }
    Ok(())
}

/// Resolve `(skip, limit)` with defaults applied.
pub fn resolve_list_query(query: &ItemListQuery) -> Result<(u64, u64), AppError> {
    let skip = query.skip.unwrap_or(0);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);
    if skip > MAX_PAGE_PARAM {
        return Err(AppError::Validation(format!(
            "skip must be at most {MAX_PAGE_PARAM}"
        )));
    }
    if limit == 0 || limit > MAX_PAGE_PARAM {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_PAGE_PARAM}"
        )));
    }
    Ok((skip, limit))
}
