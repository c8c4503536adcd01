use file_handler::{Record, Records};

/// Builds `count` records shaped like a small library catalogue.
pub fn generate_records(count: u64) -> Records {
    (0..count)
        .map(|id| {
            [
                ("isbn", format!("978-{:09}", id)),
                ("title", format!("Volume {}, revised", id)),
                ("pages", (100 + id * 7 % 900).to_string()),
                ("lent", (id % 13 == 0).to_string()),
            ]
            .into_iter()
            .map(|(field, value)| (field.to_string(), value))
            .collect::<Record>()
        })
        .collect()
}
