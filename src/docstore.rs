use anyhow::Result;
use mongodb::bson::Document;
use mongodb::{Client, Collection, Database};

const DB_NAME: &str = "optiware";
const PURCHASE_INVOICES: &str = "purchase_invoices";

/// Handle to the document store. Held in `AppState` and passed into the
/// invoice service explicitly; lifecycle is tied to process start.
#[derive(Clone)]
pub struct DocumentStore {
    db: Database,
}

impl DocumentStore {
    pub async fn connect(mongo_url: &str) -> Result<Self> {
        let client = Client::with_uri_str(mongo_url).await?;
        Ok(Self {
            db: client.database(DB_NAME),
        })
    }

    pub fn purchase_invoices(&self) -> Collection<Document> {
        self.db.collection(PURCHASE_INVOICES)
    }
}
