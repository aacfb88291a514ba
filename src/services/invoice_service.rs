use futures_util::TryStreamExt;
use mongodb::bson::{Bson, Document, doc, oid::ObjectId};

use crate::{
    docstore::DocumentStore,
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
};

const LIST_LIMIT: i64 = 200;

/// Replace the store-internal `_id` with a plain string `id` field.
fn render_invoice(mut document: Document) -> Document {
    if let Some(Bson::ObjectId(oid)) = document.remove("_id") {
        document.insert("id", oid.to_hex());
    }
    document
}

pub async fn list_invoices(docs: &DocumentStore) -> AppResult<ApiResponse<Vec<Document>>> {
    let cursor = docs
        .purchase_invoices()
        .find(doc! {})
        .sort(doc! { "created_at": -1 })
        .limit(LIST_LIMIT)
        .await?;
    let documents: Vec<Document> = cursor.try_collect().await?;
    let items = documents.into_iter().map(render_invoice).collect();

    Ok(ApiResponse::success("Ok", items, Some(Meta::empty())))
}

pub async fn get_invoice(docs: &DocumentStore, invoice_id: &str) -> AppResult<ApiResponse<Document>> {
    let object_id = ObjectId::parse_str(invoice_id)
        .map_err(|_| AppError::Validation("Invalid invoice ID".into()))?;

    let document = docs
        .purchase_invoices()
        .find_one(doc! { "_id": object_id })
        .await?;
    let document = match document {
        Some(d) => d,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success(
        "Ok",
        render_invoice(document),
        Some(Meta::empty()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_replaces_internal_id_with_hex_string() {
        let oid = ObjectId::new();
        let document = doc! { "_id": oid, "total": 12.5 };
        let rendered = render_invoice(document);
        assert!(rendered.get("_id").is_none());
        assert_eq!(rendered.get_str("id").unwrap(), oid.to_hex());
        assert_eq!(rendered.get_f64("total").unwrap(), 12.5);
    }

    #[test]
    fn malformed_object_ids_are_rejected() {
        assert!(ObjectId::parse_str("not-a-hex-id").is_err());
    }
}
