use core::fmt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use surrealdb::engine::any::Any as SurDb;
use surrealdb::method::Query;
use surrealdb::sql::Thing;

use crate::database::client::Db;
use crate::middleware::ctx::Ctx;
use crate::middleware::error::{AppError, AppResult, CtxResult};

/// Match stage of a view query: the WHERE filter over the base table.
pub enum IdentIdName {
    ColumnIdent {
        column: String,
        val: String,
        rec: bool,
    },
    /// Boolean column compared against a literal; booleans are rendered inline
    /// since all query bindings are string-typed.
    ColumnFlag {
        column: String,
        val: bool,
    },
    ColumnIdentAnd(Vec<IdentIdName>),
}

impl IdentIdName {
    pub fn get_bindings_map(&self) -> HashMap<String, String> {
        let mut bindings: HashMap<String, String> = HashMap::new();
        match self {
            IdentIdName::ColumnIdent { val, column, .. } => {
                bindings.insert(binding_name(column), val.clone());
                bindings
            }
            IdentIdName::ColumnFlag { .. } => bindings,
            IdentIdName::ColumnIdentAnd(and_filters) => {
                and_filters.iter().fold(bindings, |mut acc, iin| {
                    acc.extend(iin.get_bindings_map());
                    acc
                })
            }
        }
    }
}

fn binding_name(column: &str) -> String {
    column.replace('.', "_")
}

impl Display for IdentIdName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentIdName::ColumnIdent { column, rec, .. } => {
                let prefix = if *rec { "<record>" } else { "" };
                f.write_str(format!("{column}={prefix}${}", binding_name(column)).as_str())
            }
            IdentIdName::ColumnFlag { column, val } => {
                f.write_str(format!("{column}={val}").as_str())
            }
            IdentIdName::ColumnIdentAnd(and_filters) => f.write_str(
                and_filters
                    .iter()
                    .map(|flt| flt.to_string())
                    .collect::<Vec<_>>()
                    .join(" AND ")
                    .as_str(),
            ),
        }
    }
}

#[derive(Debug)]
pub struct QryBindingsVal(String, HashMap<String, String>);

impl QryBindingsVal {
    pub fn into_query(self, db: &Db) -> Query<SurDb> {
        self.1
            .into_iter()
            .fold(db.query(self.0), |qry, n_val| qry.bind(n_val))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub enum QryOrder {
    DESC,
    ASC,
}

impl fmt::Display for QryOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QryOrder::DESC => write!(f, "DESC"),
            QryOrder::ASC => write!(f, "ASC"),
        }
    }
}

/// Ordering/limits for list queries. `count = 0` means no LIMIT clause.
pub struct Pagination {
    pub order_by: Option<String>,
    pub order_dir: Option<QryOrder>,
    pub count: u16,
    pub start: u32,
}

/// Project stage of a view query: the SELECT field list that joins related
/// records and collapses multi-valued lookups to scalars.
pub trait ViewFieldSelector {
    fn get_select_query_fields() -> String;
}

pub fn get_entity_query_str(
    ident: &IdentIdName,
    select_fields_or_id: Option<&str>,
    pagination: Option<Pagination>,
    table_name: &str,
) -> Result<QryBindingsVal, AppError> {
    let mut q_bindings: HashMap<String, String> = HashMap::new();

    let pagination_q = match pagination {
        None => "".to_string(),
        Some(pag) => {
            let mut pag_q = match pag.order_by {
                None => "".to_string(),
                Some(order_by_f) => {
                    let dir = pag.order_dir.unwrap_or(QryOrder::DESC);
                    format!(" ORDER BY {order_by_f} {dir} ")
                }
            };
            if pag.count > 0 {
                q_bindings.insert("_limit_val".to_string(), pag.count.to_string());
                pag_q = format!(" {pag_q} LIMIT BY type::int($_limit_val) ");
                if pag.start > 0 {
                    q_bindings.insert("_start_val".to_string(), pag.start.to_string());
                    pag_q = format!(" {pag_q} START AT type::int($_start_val) ");
                }
            }
            pag_q
        }
    };

    let fields = select_fields_or_id.unwrap_or("id");
    q_bindings.extend(ident.get_bindings_map());
    q_bindings.insert("_table".to_string(), table_name.to_string());
    let query_string =
        format!("SELECT {fields} FROM type::table($_table) WHERE {ident} {pagination_q};");

    Ok(QryBindingsVal(query_string, q_bindings))
}

pub async fn get_entity_list_view<T: for<'a> Deserialize<'a> + ViewFieldSelector>(
    db: &Db,
    table_name: &str,
    ident: &IdentIdName,
    pagination: Option<Pagination>,
) -> CtxResult<Vec<T>> {
    let query_string = get_entity_query_str(
        ident,
        Some(T::get_select_query_fields().as_str()),
        pagination,
        table_name,
    )?;
    get_list_qry(db, query_string).await
}

pub async fn get_list_qry<T: for<'a> Deserialize<'a>>(
    db: &Db,
    query_string: QryBindingsVal,
) -> CtxResult<Vec<T>> {
    let mut res = query_string.into_query(db).await?;
    let res = res.take::<Vec<T>>(0)?;
    Ok(res)
}

pub async fn record_exists(db: &Db, record_id: &Thing) -> AppResult<()> {
    let qry = "RETURN record::exists(<record>$rec_id);";
    let mut res = db.query(qry).bind(("rec_id", record_id.to_raw())).await?;
    let res: Option<bool> = res.take(0)?;
    match res.unwrap_or(false) {
        true => Ok(()),
        false => Err(AppError::EntityFailIdNotFound {
            ident: record_id.to_raw(),
        }),
    }
}

pub fn with_not_found_err<T>(opt: Option<T>, ctx: &Ctx, ident: &str) -> CtxResult<T> {
    match opt {
        None => Err(ctx.to_ctx_error(AppError::EntityFailIdNotFound {
            ident: ident.to_string(),
        })),
        Some(res) => Ok(res),
    }
}
