/// Type must have new() and as_i64() methods.
/// Also diesel::FromSqlRow and diesel::AsExpression derives are needed.
///
/// ```
/// use diesel::sql_types::BigInt;
/// use simple_backend_model::diesel_i64_wrapper;
///
/// #[derive(
///     Debug,
///     diesel::FromSqlRow,
///     diesel::AsExpression,
/// )]
/// #[diesel(sql_type = BigInt)]
/// pub struct NumberWrapper {
///     number: i64,
/// }
///
/// impl NumberWrapper {
///     pub fn new(number: i64) -> Self {
///         Self { number }
///     }
///
///     pub fn as_i64(&self) -> &i64 {
///        &self.number
///     }
/// }
///
/// diesel_i64_wrapper!(NumberWrapper);
///
/// ```
#[macro_export]
macro_rules! diesel_i64_wrapper {
    ($name:ty) => {
        impl<DB: diesel::backend::Backend>
            diesel::deserialize::FromSql<diesel::sql_types::BigInt, DB> for $name
        where
            i64: diesel::deserialize::FromSql<diesel::sql_types::BigInt, DB>,
        {
            fn from_sql(
                value: <DB as diesel::backend::Backend>::RawValue<'_>,
            ) -> diesel::deserialize::Result<Self> {
                let value = <i64 as diesel::deserialize::FromSql<
                    diesel::sql_types::BigInt,
                    DB,
                >>::from_sql(value)?;
                Ok(<$name>::new(value))
            }
        }

        impl<DB: diesel::backend::Backend> diesel::serialize::ToSql<diesel::sql_types::BigInt, DB>
            for $name
        where
            i64: diesel::serialize::ToSql<diesel::sql_types::BigInt, DB>,
        {
            fn to_sql<'b>(
                &'b self,
                out: &mut diesel::serialize::Output<'b, '_, DB>,
            ) -> diesel::serialize::Result {
                <i64 as diesel::serialize::ToSql<diesel::sql_types::BigInt, DB>>::to_sql(
                    self.as_i64(),
                    out,
                )
            }
        }
    };
}

