//! PostgreSQL implementation of [`ContentStore`].

use sqlx::{FromRow, PgPool};
use store::models::DEFAULT_ALT_TEXT;
use store::repo::non_empty;
use store::{
    ContentStore, Department, Event, EventDraft, EventStatus, GalleryImage, MemberDraft,
    MemberRecord, NewGalleryImage, StoreError,
};
use uuid::Uuid;

const ABOUT_KEY: &str = "about_text";

#[derive(Clone, Debug)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: &PgPool) -> Self {
        Self { pool: pool.clone() }
    }
}

#[derive(FromRow)]
struct DepartmentRow {
    id: Uuid,
    name: String,
    sort_order: i32,
}

impl From<DepartmentRow> for Department {
    fn from(row: DepartmentRow) -> Self {
        Department {
            id: row.id.to_string(),
            name: row.name,
            sort_order: row.sort_order,
        }
    }
}

#[derive(FromRow)]
struct MemberRow {
    id: Uuid,
    name: String,
    role: String,
    department_id: Option<Uuid>,
    image_url: Option<String>,
    sort_order: i32,
}

impl From<MemberRow> for MemberRecord {
    fn from(row: MemberRow) -> Self {
        MemberRecord {
            id: row.id.to_string(),
            name: row.name,
            role: row.role,
            department_id: row.department_id.map(|id| id.to_string()),
            image_url: row.image_url,
            sort_order: row.sort_order,
        }
    }
}

#[derive(FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    date: String,
    description: Option<String>,
    full_description: Option<String>,
    hero_image: Option<String>,
    gallery: Vec<String>,
    status: String,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id.to_string(),
            title: row.title,
            date: row.date,
            description: row.description,
            full_description: row.full_description,
            hero_image: row.hero_image,
            gallery: row.gallery,
            status: EventStatus::from_stored(&row.status),
        }
    }
}

#[derive(FromRow)]
struct GalleryRow {
    id: Uuid,
    url: String,
    alt: String,
    sort_order: i32,
}

impl From<GalleryRow> for GalleryImage {
    fn from(row: GalleryRow) -> Self {
        GalleryImage {
            id: row.id.to_string(),
            url: row.url,
            alt: row.alt,
            sort_order: row.sort_order,
        }
    }
}

fn backend(e: sqlx::Error) -> StoreError {
    match &e {
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            StoreError::NotFound("department".into())
        }
        _ => StoreError::Backend(e.to_string()),
    }
}

fn parse_id(kind: &str, id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::NotFound(format!("{kind} {id}")))
}

fn parse_department(id: Option<&str>) -> Result<Option<Uuid>, StoreError> {
    id.filter(|s| !s.is_empty())
        .map(|s| parse_id("department", s))
        .transpose()
}

const MEMBER_COLUMNS: &str = "id, name, role, department_id, image_url, sort_order";
const EVENT_COLUMNS: &str =
    "id, title, date, description, full_description, hero_image, gallery, status";

impl ContentStore for PgContentStore {
    async fn get_about_text(&self) -> Result<Option<String>, StoreError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM site_content WHERE key = $1")
            .bind(ABOUT_KEY)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        Ok(row.map(|(value,)| value))
    }

    async fn set_about_text(&self, text: &str) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO site_content (key, value) VALUES ($1, $2)
             ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = NOW()",
        )
        .bind(ABOUT_KEY)
        .bind(text)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        Ok(())
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        let rows: Vec<DepartmentRow> = sqlx::query_as(
            "SELECT id, name, sort_order FROM departments ORDER BY sort_order, created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(rows.into_iter().map(Department::from).collect())
    }

    async fn add_department(&self, name: &str) -> Result<Department, StoreError> {
        let result: Result<DepartmentRow, sqlx::Error> = sqlx::query_as(
            "INSERT INTO departments (name, sort_order)
             VALUES ($1, (SELECT COUNT(*) FROM departments)::INT)
             RETURNING id, name, sort_order",
        )
        .bind(name.trim())
        .fetch_one(&self.pool)
        .await;
        match result {
            Ok(row) => Ok(row.into()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(
                StoreError::Conflict("A department with this name already exists".into()),
            ),
            Err(e) => Err(backend(e)),
        }
    }

    async fn delete_department(&self, id: &str) -> Result<(), StoreError> {
        let uuid = parse_id("department", id)?;
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("department {id}")));
        }
        Ok(())
    }

    async fn list_members(&self) -> Result<Vec<MemberRecord>, StoreError> {
        let rows: Vec<MemberRow> = sqlx::query_as(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members ORDER BY sort_order, created_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(rows.into_iter().map(MemberRecord::from).collect())
    }

    async fn insert_member(&self, draft: &MemberDraft) -> Result<MemberRecord, StoreError> {
        let department = parse_department(draft.department_id.as_deref())?;
        let row: MemberRow = sqlx::query_as(&format!(
            "INSERT INTO team_members (name, role, department_id, image_url, sort_order)
             VALUES ($1, $2, $3, $4, (SELECT COUNT(*) FROM team_members)::INT)
             RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(draft.name.trim())
        .bind(draft.role.trim())
        .bind(department)
        .bind(&draft.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;
        Ok(row.into())
    }

    async fn update_member(
        &self,
        id: &str,
        draft: &MemberDraft,
    ) -> Result<MemberRecord, StoreError> {
        let uuid = parse_id("member", id)?;
        let department = parse_department(draft.department_id.as_deref())?;
        let row: Option<MemberRow> = sqlx::query_as(&format!(
            "UPDATE team_members
             SET name = $2, role = $3, department_id = $4,
                 image_url = COALESCE($5, image_url), updated_at = NOW()
             WHERE id = $1
             RETURNING {MEMBER_COLUMNS}"
        ))
        .bind(uuid)
        .bind(draft.name.trim())
        .bind(draft.role.trim())
        .bind(department)
        .bind(&draft.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        row.map(MemberRecord::from)
            .ok_or_else(|| StoreError::NotFound(format!("member {id}")))
    }

    async fn delete_member(&self, id: &str) -> Result<(), StoreError> {
        let uuid = parse_id("member", id)?;
        let result = sqlx::query("DELETE FROM team_members WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("member {id}")));
        }
        Ok(())
    }

    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        let rows: Vec<EventRow> = sqlx::query_as(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    async fn insert_event(&self, draft: &EventDraft) -> Result<Event, StoreError> {
        let row: EventRow = sqlx::query_as(&format!(
            "INSERT INTO events
                (title, date, description, full_description, hero_image, gallery, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(draft.title.trim())
        .bind(draft.date.trim())
        .bind(non_empty(&draft.description))
        .bind(non_empty(&draft.full_description))
        .bind(&draft.hero_image)
        .bind(&draft.gallery)
        .bind(draft.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;
        Ok(row.into())
    }

    async fn update_event(&self, id: &str, draft: &EventDraft) -> Result<Event, StoreError> {
        let uuid = parse_id("event", id)?;
        let row: Option<EventRow> = sqlx::query_as(&format!(
            "UPDATE events
             SET title = $2, date = $3, description = $4, full_description = $5,
                 hero_image = COALESCE($6, hero_image), gallery = $7, status = $8,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {EVENT_COLUMNS}"
        ))
        .bind(uuid)
        .bind(draft.title.trim())
        .bind(draft.date.trim())
        .bind(non_empty(&draft.description))
        .bind(non_empty(&draft.full_description))
        .bind(&draft.hero_image)
        .bind(&draft.gallery)
        .bind(draft.status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        row.map(Event::from)
            .ok_or_else(|| StoreError::NotFound(format!("event {id}")))
    }

    async fn delete_event(&self, id: &str) -> Result<(), StoreError> {
        let uuid = parse_id("event", id)?;
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("event {id}")));
        }
        Ok(())
    }

    async fn list_gallery(&self) -> Result<Vec<GalleryImage>, StoreError> {
        let rows: Vec<GalleryRow> = sqlx::query_as(
            "SELECT id, url, alt, sort_order FROM gallery_images ORDER BY sort_order, created_at",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        Ok(rows.into_iter().map(GalleryImage::from).collect())
    }

    async fn insert_gallery_image(
        &self,
        image: &NewGalleryImage,
    ) -> Result<GalleryImage, StoreError> {
        let alt = image
            .alt
            .as_deref()
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ALT_TEXT.to_string());
        let row: GalleryRow = sqlx::query_as(
            "INSERT INTO gallery_images (url, alt, sort_order)
             VALUES ($1, $2, (SELECT COUNT(*) FROM gallery_images)::INT)
             RETURNING id, url, alt, sort_order",
        )
        .bind(&image.url)
        .bind(alt)
        .fetch_one(&self.pool)
        .await
        .map_err(backend)?;
        Ok(row.into())
    }

    async fn delete_gallery_image(&self, id: &str) -> Result<(), StoreError> {
        let uuid = parse_id("gallery image", id)?;
        let result = sqlx::query("DELETE FROM gallery_images WHERE id = $1")
            .bind(uuid)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(format!("gallery image {id}")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        assert!(matches!(parse_id("event", "nope"), Err(StoreError::NotFound(_))));
        assert_eq!(parse_department(None).unwrap(), None);
        assert_eq!(parse_department(Some("")).unwrap(), None);
        let id = Uuid::new_v4();
        assert_eq!(parse_department(Some(&id.to_string())).unwrap(), Some(id));
    }

    #[test]
    fn test_event_row_status() {
        let row = EventRow {
            id: Uuid::new_v4(),
            title: "Cricket Cup".into(),
            date: "November 10, 2024".into(),
            description: None,
            full_description: None,
            hero_image: None,
            gallery: vec![],
            status: "past".into(),
        };
        assert!(Event::from(row).is_past());
    }
}
