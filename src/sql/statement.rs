use super::SqlValue;

/// One SQL statement with positional (`?`) parameters in bind order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statement {
    pub sql: &'static str,
    pub params: Vec<SqlValue>,
}

impl Statement {
    pub fn new(sql: &'static str) -> Self {
        Statement {
            sql,
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.params.push(value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_in_order() {
        let stmt = Statement::new("update routes set name = ?, distance = ? where rowid = ?")
            .bind("Harbour")
            .bind(4100_i64)
            .bind(9_i64);
        assert_eq!(
            stmt.params,
            vec![
                SqlValue::Text("Harbour".into()),
                SqlValue::Integer(4100),
                SqlValue::Integer(9)
            ]
        );
    }
}
