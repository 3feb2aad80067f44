//! DDL and INSERT script rendering.

use super::Dialect;
use crate::schema::Table;
use crate::value::{TypeTag, Value};
use std::collections::HashMap;

/// Render one DDL script per table and one INSERT script per non-empty
/// table, in the order given. Output is byte-stable for identical input.
pub fn generate(tables: &[Table], dialect: Dialect) -> (Vec<String>, Vec<String>) {
    let pk_columns: HashMap<&str, &str> = tables
        .iter()
        .filter_map(|t| t.primary_key().map(|pk| (t.name.as_str(), pk)))
        .collect();

    let ddl = tables
        .iter()
        .map(|t| render_create_table(t, dialect, &pk_columns))
        .collect();
    let inserts = tables
        .iter()
        .filter(|t| !t.rows.is_empty())
        .map(render_insert)
        .collect();
    (ddl, inserts)
}

fn render_create_table(
    table: &Table,
    dialect: Dialect,
    pk_columns: &HashMap<&str, &str>,
) -> String {
    let mut out = format!("create table {} (\n", table.name);

    for column in &table.columns {
        // a column that never saw a value defaults to the widest type
        let tag = column.state.tag().unwrap_or(TypeTag::Text);
        out.push_str(&format!("    {} {}", column.name, dialect.type_name(tag)));
        if !column.is_nullable {
            out.push_str(" not null");
        }
        out.push_str(",\n");
    }

    if let Some(pk) = table.primary_key() {
        out.push_str(&format!("    primary key ({})", pk));
    }

    for column in &table.columns {
        if let Some(target) = table.foreign_keys.get(&column.name) {
            if let Some(target_pk) = pk_columns.get(target.as_str()) {
                out.push_str(&format!(
                    ",\n    constraint fk_{}_{} foreign key ({}) references {} ({})",
                    table.name, column.name, column.name, target, target_pk
                ));
            }
        }
    }

    out.push_str("\n);\n");
    out
}

fn render_insert(table: &Table) -> String {
    let columns: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
    let mut out = format!("insert into {} ({}) values\n", table.name, columns.join(", "));
    for (i, row) in table.rows.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        let literals: Vec<String> = row.iter().map(render_literal).collect();
        out.push_str(&format!("    ({})", literals.join(", ")));
    }
    out.push_str(";\n");
    out
}

/// SQL literal for a typed value. Text is quoted raw: embedded single
/// quotes are not escaped (known limitation).
pub fn render_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(n) => n.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Timestamp(d) => format!("'{}'", d),
        Value::Text(s) => format!("'{}'", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;
    use crate::resolver::resolve;
    use crate::source::TabularSource;
    use chrono::NaiveDate;

    fn source(name: &str, records: &[&[&str]]) -> TabularSource {
        TabularSource::new(
            name,
            records
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        )
    }

    fn authors_and_books() -> Vec<Table> {
        let (authors, _) = load(&source(
            "authors",
            &[&["author_id", "name"], &["1", "Ada"], &["2", "Grace"]],
        ))
        .unwrap();
        let (books, candidates) = load(&source(
            "books",
            &[&["book_id", "title", "author_id"], &["1", "Engines", "1"]],
        ))
        .unwrap();
        let mut tables = vec![authors, books];
        resolve(&mut tables, &candidates).unwrap();
        tables
    }

    #[test]
    fn test_ddl_shape() {
        let tables = authors_and_books();
        let (ddl, _) = generate(&tables, Dialect::Generic);
        assert_eq!(
            ddl[0],
            "create table authors (\n\
             \x20   author_id integer not null,\n\
             \x20   name text not null,\n\
             \x20   primary key (author_id)\n\
             );\n"
        );
        assert_eq!(
            ddl[1],
            "create table books (\n\
             \x20   book_id integer not null,\n\
             \x20   title text not null,\n\
             \x20   author_id integer not null,\n\
             \x20   primary key (book_id),\n\
             \x20   constraint fk_books_author_id foreign key (author_id) references authors (author_id)\n\
             );\n"
        );
    }

    #[test]
    fn test_insert_shape() {
        let tables = authors_and_books();
        let (_, inserts) = generate(&tables, Dialect::Generic);
        assert_eq!(
            inserts[0],
            "insert into authors (author_id, name) values\n\
             \x20   (1, 'Ada'),\n\
             \x20   (2, 'Grace');\n"
        );
        assert_eq!(
            inserts[1],
            "insert into books (book_id, title, author_id) values\n\
             \x20   (1, 'Engines', 1);\n"
        );
    }

    #[test]
    fn test_nullable_column_omits_not_null() {
        let (table, _) = load(&source(
            "users",
            &[&["user_id", "email"], &["1", ""], &["2", "g@example.com"]],
        ))
        .unwrap();
        let (ddl, _) = generate(&[table], Dialect::Generic);
        assert!(ddl[0].contains("email text,\n"));
        assert!(!ddl[0].contains("email text not null"));
    }

    #[test]
    fn test_empty_table_gets_no_insert() {
        let (table, _) = load(&source("users", &[&["user_id", "name"]])).unwrap();
        let (ddl, inserts) = generate(&[table], Dialect::Generic);
        assert_eq!(ddl.len(), 1);
        assert!(inserts.is_empty());
    }

    #[test]
    fn test_literals() {
        assert_eq!(render_literal(&Value::Null), "NULL");
        assert_eq!(render_literal(&Value::Integer(-7)), "-7");
        assert_eq!(render_literal(&Value::Float(2.5)), "2.5");
        assert_eq!(render_literal(&Value::Boolean(true)), "true");
        assert_eq!(render_literal(&Value::Boolean(false)), "false");
        assert_eq!(
            render_literal(&Value::Timestamp(
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
            )),
            "'2024-01-15'"
        );
        assert_eq!(
            render_literal(&Value::Text("Ada".to_string())),
            "'Ada'"
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let tables = authors_and_books();
        assert_eq!(
            generate(&tables, Dialect::Generic),
            generate(&tables, Dialect::Generic)
        );
    }
}
