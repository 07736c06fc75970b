use deadpool_postgres::Pool;
use tokio_postgres::Row;

use crate::models::{NewProduct, Product, ProductStatus};
use crate::store::error::{Error, Result};

const PRODUCT_COLUMNS: &str =
    "id, name, name_ar, description, description_ar, price, original_price, offer, images, \
     status, created_at, updated_at";

fn product_from_row(row: &Row) -> Result<Product> {
    let status: String = row.try_get("status")?;
    let status = ProductStatus::parse(&status)
        .ok_or_else(|| Error::Corrupt(format!("unknown product status '{}'", status)))?;

    Ok(Product {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        name_ar: row.try_get("name_ar")?,
        description: row.try_get("description")?,
        description_ar: row.try_get("description_ar")?,
        price: row.try_get("price")?,
        original_price: row.try_get("original_price")?,
        offer: row.try_get("offer")?,
        images: row.try_get("images")?,
        status,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// List all products, newest first
pub async fn list(pool: &Pool) -> Result<Vec<Product>> {
    let conn = pool.get().await?;
    let sql = format!(
        "SELECT {} FROM products ORDER BY created_at DESC",
        PRODUCT_COLUMNS
    );
    let rows = conn.query(&sql, &[]).await?;
    rows.iter().map(product_from_row).collect()
}

/// Fetch a single product by id
pub async fn get(pool: &Pool, id: i32) -> Result<Option<Product>> {
    let conn = pool.get().await?;
    let sql = format!("SELECT {} FROM products WHERE id = $1", PRODUCT_COLUMNS);
    let row = conn.query_opt(&sql, &[&id]).await?;
    row.as_ref().map(product_from_row).transpose()
}

/// Insert a new product and return the stored record
pub async fn create(pool: &Pool, data: &NewProduct) -> Result<Product> {
    let conn = pool.get().await?;
    let sql = format!(
        "INSERT INTO products \
         (name, name_ar, description, description_ar, price, original_price, offer, images, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
         RETURNING {}",
        PRODUCT_COLUMNS
    );
    let row = conn
        .query_one(
            &sql,
            &[
                &data.name,
                &data.name_ar,
                &data.description,
                &data.description_ar,
                &data.price,
                &data.original_price,
                &data.offer,
                &data.images,
                &data.status.as_str(),
            ],
        )
        .await?;
    product_from_row(&row)
}

/// Replace a product's fields, bumping `updated_at`
///
/// Returns `None` when the id does not exist.
pub async fn update(pool: &Pool, id: i32, data: &NewProduct) -> Result<Option<Product>> {
    let conn = pool.get().await?;
    let sql = format!(
        "UPDATE products SET \
         name = $1, name_ar = $2, description = $3, description_ar = $4, price = $5, \
         original_price = $6, offer = $7, images = $8, status = $9, updated_at = now() \
         WHERE id = $10 \
         RETURNING {}",
        PRODUCT_COLUMNS
    );
    let row = conn
        .query_opt(
            &sql,
            &[
                &data.name,
                &data.name_ar,
                &data.description,
                &data.description_ar,
                &data.price,
                &data.original_price,
                &data.offer,
                &data.images,
                &data.status.as_str(),
                &id,
            ],
        )
        .await?;
    row.as_ref().map(product_from_row).transpose()
}

/// Delete a product; deleting a missing id is not an error
pub async fn delete(pool: &Pool, id: i32) -> Result<()> {
    let conn = pool.get().await?;
    conn.execute("DELETE FROM products WHERE id = $1", &[&id])
        .await?;
    Ok(())
}

/// Count all products
pub async fn count(pool: &Pool) -> Result<i64> {
    let conn = pool.get().await?;
    let row = conn.query_one("SELECT COUNT(*) FROM products", &[]).await?;
    Ok(row.get(0))
}
