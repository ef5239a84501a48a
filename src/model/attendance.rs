use serde::Serialize;

/// One row of the `attendance` table. Every field besides `id` is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct AttendanceRecord {
    /// 0 means "not stored yet"; the database assigns the real id on insert.
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub phone: String,
    pub address: String,
    pub course_name: String,
    pub course_length: String,
    pub graduation_date: String,
    pub tutor_name: String,
    pub time_in: String,
    pub time_out: String,
    pub absence_reason: String,
    pub camera_status: String,
}

/// First value submitted under `key`. Later repeats are ignored.
pub fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// Submitted add/edit form. Missing inputs are empty strings.
#[derive(Debug, Default)]
pub struct AttendanceForm {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub phone: String,
    pub address: String,
    pub course_name: String,
    pub course_length: String,
    pub graduation_date: String,
    pub tutor_name: String,
    pub time_in: String,
    pub time_out: String,
    pub absence_reason: String,
    pub camera_status: String,
}

impl AttendanceForm {
    /// Reads the form's camelCase input names out of decoded key/value pairs.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let field = |key: &str| first_value(pairs, key).unwrap_or_default().to_string();

        Self {
            id: field("id"),
            first_name: field("firstName"),
            last_name: field("lastName"),
            dob: field("dob"),
            phone: field("phone"),
            address: field("address"),
            course_name: field("courseName"),
            course_length: field("courseLength"),
            graduation_date: field("graduationDate"),
            tutor_name: field("tutorName"),
            time_in: field("timeIn"),
            time_out: field("timeOut"),
            absence_reason: field("absenceReason"),
            camera_status: field("cameraStatus"),
        }
    }

    /// Values are taken as-is. An `id` that is missing or not an integer
    /// becomes 0, which turns the save into an insert.
    pub fn into_record(self) -> AttendanceRecord {
        AttendanceRecord {
            id: self.id.parse().unwrap_or(0),
            first_name: self.first_name,
            last_name: self.last_name,
            dob: self.dob,
            phone: self.phone,
            address: self.address,
            course_name: self.course_name,
            course_length: self.course_length,
            graduation_date: self.graduation_date,
            tutor_name: self.tutor_name,
            time_in: self.time_in,
            time_out: self.time_out,
            absence_reason: self.absence_reason,
            camera_status: self.camera_status,
        }
    }
}
