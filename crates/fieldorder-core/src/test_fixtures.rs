use crate::{
    accessor::{
        GetByte, GetChar, GetDouble, GetFloat, GetInt, GetLong, GetReference, GetShort, Getter,
    },
    model::{
        entity::EntityModel,
        field::{FieldKind, FieldModel},
    },
};

///
/// Row
///
/// Test entity with one field of every kind.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Row {
    pub(crate) id: i32,
    pub(crate) name: String,
    pub(crate) tag: Option<String>,
    pub(crate) score: f64,
    pub(crate) weight: f32,
    pub(crate) age: i8,
    pub(crate) level: i16,
    pub(crate) rank: i64,
    pub(crate) grade: char,
}

impl Row {
    pub(crate) fn new(id: i32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            grade: 'a',
            ..Self::default()
        }
    }

    pub(crate) fn with_tag(mut self, tag: Option<&str>) -> Self {
        self.tag = tag.map(ToString::to_string);
        self
    }

    pub(crate) const fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub(crate) const fn with_rank(mut self, rank: i64) -> Self {
        self.rank = rank;
        self
    }
}

pub(crate) static ID: FieldModel = FieldModel::new("Row", "id", FieldKind::Int);
pub(crate) static NAME: FieldModel = FieldModel::new("Row", "name", FieldKind::Reference);
pub(crate) static TAG: FieldModel = FieldModel::new("Row", "tag", FieldKind::Reference);
pub(crate) static SCORE: FieldModel = FieldModel::new("Row", "score", FieldKind::Double);
pub(crate) static WEIGHT: FieldModel = FieldModel::new("Row", "weight", FieldKind::Float);
pub(crate) static AGE: FieldModel = FieldModel::new("Row", "age", FieldKind::Byte);
pub(crate) static LEVEL: FieldModel = FieldModel::new("Row", "level", FieldKind::Short);
pub(crate) static RANK: FieldModel = FieldModel::new("Row", "rank", FieldKind::Long);
pub(crate) static GRADE: FieldModel = FieldModel::new("Row", "grade", FieldKind::Char);

pub(crate) static ROW_MODEL: EntityModel = EntityModel::new(
    "Row",
    &[
        &ID, &NAME, &TAG, &SCORE, &WEIGHT, &AGE, &LEVEL, &RANK, &GRADE,
    ],
);

fn row_name(row: &Row) -> Option<&str> {
    Some(row.name.as_str())
}

fn row_tag(row: &Row) -> Option<&str> {
    row.tag.as_deref()
}

pub(crate) static ROW_ID: GetInt<Row> = Getter::new(&ID, |row: &Row| row.id);
pub(crate) static ROW_NAME: GetReference<Row, str> = GetReference::new(&NAME, row_name);
pub(crate) static ROW_TAG: GetReference<Row, str> = GetReference::new(&TAG, row_tag);
pub(crate) static ROW_SCORE: GetDouble<Row> = Getter::new(&SCORE, |row: &Row| row.score);
pub(crate) static ROW_WEIGHT: GetFloat<Row> = Getter::new(&WEIGHT, |row: &Row| row.weight);
pub(crate) static ROW_AGE: GetByte<Row> = Getter::new(&AGE, |row: &Row| row.age);
pub(crate) static ROW_LEVEL: GetShort<Row> = Getter::new(&LEVEL, |row: &Row| row.level);
pub(crate) static ROW_RANK: GetLong<Row> = Getter::new(&RANK, |row: &Row| row.rank);
pub(crate) static ROW_GRADE: GetChar<Row> = Getter::new(&GRADE, |row: &Row| row.grade);

/// Ids of `rows` in their current order.
pub(crate) fn ids(rows: &[Row]) -> Vec<i32> {
    rows.iter().map(|row| row.id).collect()
}
