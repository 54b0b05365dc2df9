use pledgetrack_domain::shared::DomainError;

/// Extension trait mapping sqlx failures into domain errors with context.
pub trait ResultExt<T> {
    /// Usage: `query.fetch_all(pool).await.to_store_err("List pledges")?`
    fn to_store_err(self, context: &str) -> Result<T, DomainError>;
}

impl<T> ResultExt<T> for Result<T, sqlx::Error> {
    fn to_store_err(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| map_sqlx_error(e, context))
    }
}

/// Constraint and decode failures mean the data is wrong; everything else
/// means the store could not serve the request and the caller may retry.
pub(crate) fn map_sqlx_error(err: sqlx::Error, context: &str) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.is_unique_violation()
                || db_err.is_foreign_key_violation()
                || db_err.is_check_violation() =>
        {
            DomainError::DataIntegrity(format!("{}: {}", context, err))
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) | sqlx::Error::ColumnNotFound(_) => {
            DomainError::DataIntegrity(format!("{}: {}", context, err))
        }
        _ => DomainError::StoreUnavailable(format!("{}: {}", context, err)),
    }
}
