//! Registers a small set of record types and writes their interfaces.
//!
//! Run with: `cargo run --example generate -- [output.ts]`

use std::path::PathBuf;
use tsgen::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), CodegenError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let output_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("interfaces.ts"), PathBuf::from);

    let mut registry = Registry::new();

    let author = registry.declare_default(
        RecordType::builder("Author")
            .field("id", ScalarKind::Integer)
            .field("email", ScalarKind::Email)
            .field("joined", ScalarKind::DateTime)
            .build(),
    );

    let comment = RecordType::builder("Comment");
    let comment_ref = comment.reference();
    let comment = registry.declare_default(
        comment
            .field("body", ScalarKind::Char)
            .field("author", FieldKind::single(&*author))
            .field("replies", FieldKind::array_of(comment_ref))
            .build(),
    );

    registry.declare_default(
        RecordType::builder("Article")
            .field("slug", ScalarKind::Slug)
            .field("author", FieldKind::single(&*author))
            .field("comments", FieldKind::array_of(&*comment))
            .field("metadata", ScalarKind::Json)
            .field("status", ScalarKind::Choice)
            .build(),
    );

    // Model-bound record: fields are computed when the model is instantiated.
    registry.declare(
        "admin",
        RecordType::builder("AuditEntry").model_bound(|| {
            vec![
                Field::new("id", ScalarKind::Uuid),
                Field::new("at", ScalarKind::DateTime),
                Field::new("changes", FieldKind::array_of(ScalarKind::Dict)),
            ]
        }),
    );

    generate_ts(&registry, &output_path, DEFAULT_CONTEXT)?;
    println!("{}", generate_string(&registry, "admin")?);

    Ok(())
}
