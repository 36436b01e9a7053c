//! Collections and the exact-match query shape the data service accepts.
//!
//! A [`Query`] is deliberately small: equality filters joined with AND and at
//! most one ordering. That is all the application needs, and it maps directly
//! onto PostgREST's `col=eq.value&order=col.asc` query string.

use std::fmt;

/// The four collections owned by the data service.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Table {
    Profiles,
    Projects,
    Templates,
    UserSettings,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Profiles => "profiles",
            Self::Projects => "projects",
            Self::Templates => "templates",
            Self::UserSettings => "user_settings",
        }
    }

    /// Column used to resolve upsert conflicts.
    pub fn upsert_key(&self) -> &'static str {
        match self {
            Self::UserSettings => "user_id",
            _ => "id",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

/// A select against one collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    pub table: Table,
    pub filters: Vec<Filter>,
    pub order: Option<Order>,
}

impl Query {
    pub fn from(table: Table) -> Self {
        Self {
            table,
            filters: Vec::new(),
            order: None,
        }
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push(Filter {
            column: column.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Sort the result. A second call replaces the first.
    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            ascending,
        });
        self
    }

    /// PostgREST query-string pairs for this select.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), "*".to_string())];
        for filter in &self.filters {
            params.push((filter.column.clone(), format!("eq.{}", filter.value)));
        }
        if let Some(order) = &self.order {
            let direction = if order.ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{}.{direction}", order.column)));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_upsert_on_user_id() {
        assert_eq!(Table::UserSettings.upsert_key(), "user_id");
        assert_eq!(Table::Projects.upsert_key(), "id");
        assert_eq!(Table::UserSettings.name(), "user_settings");
    }

    #[test]
    fn test_query_params() {
        let query = Query::from(Table::Projects)
            .eq("user_id", "u1")
            .eq("is_public", true)
            .order("created_at", false);
        assert_eq!(
            query.to_params(),
            vec![
                ("select".to_string(), "*".to_string()),
                ("user_id".to_string(), "eq.u1".to_string()),
                ("is_public".to_string(), "eq.true".to_string()),
                ("order".to_string(), "created_at.desc".to_string()),
            ]
        );
    }

    #[test]
    fn test_last_order_wins() {
        let query = Query::from(Table::Templates)
            .order("created_at", false)
            .order("name", true);
        assert_eq!(
            query.order,
            Some(Order {
                column: "name".to_string(),
                ascending: true
            })
        );
    }
}
