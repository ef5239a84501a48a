use sqlx::Any;

use crate::db::DbPool;
use crate::model::attendance::AttendanceRecord;

const SELECT_COLUMNS: &str = r#"
    SELECT id, first_name, last_name, dob, phone, address, course_name, course_length,
           graduation_date, tutor_name, time_in, time_out, absence_reason, camera_status
    FROM attendance
"#;

/// All records, in whatever order the database hands them back.
pub async fn list_all(pool: &DbPool) -> Result<Vec<AttendanceRecord>, sqlx::Error> {
    sqlx::query_as::<_, AttendanceRecord>(SELECT_COLUMNS)
        .fetch_all(pool)
        .await
}

pub async fn get_by_id(pool: &DbPool, id: i64) -> Result<Option<AttendanceRecord>, sqlx::Error> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?");

    sqlx::query_as::<_, AttendanceRecord>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Inserts when `record.id` is 0, otherwise updates the row with that id.
/// Updating an id that does not exist touches nothing and is not an error.
///
/// Returns the number of rows written. Not every driver reports the id it
/// assigned on insert (sqlite through `Any` does not), so callers that need
/// it look the row up again.
pub async fn upsert(pool: &DbPool, record: &AttendanceRecord) -> Result<u64, sqlx::Error> {
    let query = if record.id == 0 {
        sqlx::query::<Any>(
            r#"
            INSERT INTO attendance
            (first_name, last_name, dob, phone, address, course_name, course_length,
             graduation_date, tutor_name, time_in, time_out, absence_reason, camera_status)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
    } else {
        sqlx::query::<Any>(
            r#"
            UPDATE attendance
            SET first_name = ?, last_name = ?, dob = ?, phone = ?, address = ?,
                course_name = ?, course_length = ?, graduation_date = ?, tutor_name = ?,
                time_in = ?, time_out = ?, absence_reason = ?, camera_status = ?
            WHERE id = ?
            "#,
        )
    };

    let mut query = query
        .bind(record.first_name.as_str())
        .bind(record.last_name.as_str())
        .bind(record.dob.as_str())
        .bind(record.phone.as_str())
        .bind(record.address.as_str())
        .bind(record.course_name.as_str())
        .bind(record.course_length.as_str())
        .bind(record.graduation_date.as_str())
        .bind(record.tutor_name.as_str())
        .bind(record.time_in.as_str())
        .bind(record.time_out.as_str())
        .bind(record.absence_reason.as_str())
        .bind(record.camera_status.as_str());

    if record.id != 0 {
        query = query.bind(record.id);
    }

    let result = query.execute(pool).await?;

    Ok(result.rows_affected())
}

/// Removes the row if present. Returns how many rows went away, so deleting
/// twice yields 1 then 0.
pub async fn delete_by_id(pool: &DbPool, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM attendance WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
