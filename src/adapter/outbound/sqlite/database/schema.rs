// Mirrors the DDL in `connection::CREATE_STUDENT_TABLE`.

diesel::table! {
    student (roll) {
        roll -> Integer,
        name -> Nullable<Text>,
        marks -> Nullable<Integer>,
    }
}
