pub mod ingest_policy;
