//! Helpers for driving tables against `wiremock` servers.

use std::time::Duration;

use serde_json::{Value, json};

use crate::RemoteTable;

/// A `{ users, total, skip, limit }` body with `count` generated users.
pub fn users_body(count: u64, total: u64, skip: u64) -> Value {
    let users: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "id": skip + i + 1,
                "firstName": format!("First{i}"),
                "lastName": format!("Last{i}"),
                "email": format!("user{i}@example.com"),
                "age": 20 + i,
                "gender": if i % 2 == 0 { "female" } else { "male" },
                "role": "user",
                "company": { "name": "Acme" },
                "address": { "city": "Springfield", "state": "Ohio" }
            })
        })
        .collect();

    json!({ "users": users, "total": total, "skip": skip, "limit": count })
}

/// Lets spawned requests run until the table has nothing in flight.
pub async fn settle(table: &mut RemoteTable) {
    for _ in 0..500 {
        table.sync();
        if !table.is_loading() && !table.is_exporting() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("table did not settle: {table:?}");
}
