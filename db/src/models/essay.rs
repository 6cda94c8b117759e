use chrono::{DateTime, Duration, NaiveTime, Utc};
use grader::types::Scores;
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{
    DatabaseConnection, FromQueryResult, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};
use serde::{Deserialize, Serialize};

/// Length of the trailing window the monthly report covers.
pub const REPORT_WINDOW_DAYS: i64 = 30;

/// One submitted essay with its generated feedback and rubric scores.
///
/// Rows are created once and never updated or deleted; `id` is the only lookup key.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "essays")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "Text")]
    pub essay: String,
    #[sea_orm(column_type = "Text")]
    pub feedback: String,

    pub clarity: i32,
    pub argument: i32,
    pub evidence: i32,
    pub organization: i32,
    pub grammar: i32,
    pub style: i32,

    pub submitted_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Projection of the six score columns used by the report query.
#[derive(Debug, FromQueryResult)]
struct ScoreRow {
    clarity: i32,
    argument: i32,
    evidence: i32,
    organization: i32,
    grammar: i32,
    style: i32,
}

impl From<ScoreRow> for Scores {
    fn from(row: ScoreRow) -> Self {
        Scores {
            clarity: row.clarity,
            argument: row.argument,
            evidence: row.evidence,
            organization: row.organization,
            grammar: row.grammar,
            style: row.style,
        }
    }
}

/// Start of the report window for `now`: midnight UTC, thirty days back.
///
/// Whole days are counted, so everything submitted on the first day of the
/// window is included regardless of time of day.
pub fn report_window_start(now: DateTime<Utc>) -> DateTime<Utc> {
    (now - Duration::days(REPORT_WINDOW_DAYS))
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}

impl Model {
    /// Stores a new submission stamped with the current time.
    ///
    /// # Arguments
    /// * `db` - Database connection reference.
    /// * `essay` - The essay text as submitted.
    /// * `feedback` - Feedback generated for the essay.
    /// * `scores` - Rubric scores for the essay.
    pub async fn create(
        db: &DatabaseConnection,
        essay: &str,
        feedback: &str,
        scores: &Scores,
    ) -> Result<Model, DbErr> {
        Self::create_at(db, essay, feedback, scores, Utc::now()).await
    }

    /// Stores a new submission with an explicit timestamp.
    ///
    /// The insert runs in its own transaction, so a failed insert leaves no partial row.
    pub async fn create_at(
        db: &DatabaseConnection,
        essay: &str,
        feedback: &str,
        scores: &Scores,
        submitted_at: DateTime<Utc>,
    ) -> Result<Model, DbErr> {
        let active = ActiveModel {
            essay: Set(essay.to_owned()),
            feedback: Set(feedback.to_owned()),
            clarity: Set(scores.clarity),
            argument: Set(scores.argument),
            evidence: Set(scores.evidence),
            organization: Set(scores.organization),
            grammar: Set(scores.grammar),
            style: Set(scores.style),
            submitted_at: Set(submitted_at),
            ..Default::default()
        };

        let txn = db.begin().await?;
        let model = active.insert(&txn).await?;
        txn.commit().await?;

        tracing::debug!(essay_id = model.id, "Stored essay submission");
        Ok(model)
    }

    /// Returns only the essay text of submission `id`, if it exists.
    pub async fn find_essay_text(
        db: &DatabaseConnection,
        id: i64,
    ) -> Result<Option<String>, DbErr> {
        Entity::find_by_id(id)
            .select_only()
            .column(Column::Essay)
            .into_tuple::<String>()
            .one(db)
            .await
    }

    /// Returns the scores of every submission made at or after `cutoff`.
    pub async fn scores_since(
        db: &DatabaseConnection,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Scores>, DbErr> {
        let rows = Entity::find()
            .select_only()
            .columns([
                Column::Clarity,
                Column::Argument,
                Column::Evidence,
                Column::Organization,
                Column::Grammar,
                Column::Style,
            ])
            .filter(Column::SubmittedAt.gte(cutoff))
            .order_by_asc(Column::Id)
            .into_model::<ScoreRow>()
            .all(db)
            .await?;

        Ok(rows.into_iter().map(Scores::from).collect())
    }

    /// Scores inside the report window ending at `now`.
    pub async fn scores_in_report_window(
        db: &DatabaseConnection,
        now: DateTime<Utc>,
    ) -> Result<Vec<Scores>, DbErr> {
        Self::scores_since(db, report_window_start(now)).await
    }

    pub fn scores(&self) -> Scores {
        Scores {
            clarity: self.clarity,
            argument: self.argument,
            evidence: self.evidence,
            organization: self.organization,
            grammar: self.grammar,
            style: self.style,
        }
    }
}
