//! Team directory: the latest result per respondent.
//!
//! The directory is a [`ResultSink`] (through [`DirectorySink`]). Sessions
//! are bound to respondents before they complete; a record for a bound
//! session replaces that respondent's profile if it is newer.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use compass_types::TypeCode;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::session::SessionId;
use crate::sink::{ResultRecord, ResultSink, SinkError};

/// Identifier of a team member
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RespondentId(pub String);

impl RespondentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RespondentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Respondent {
    pub id: RespondentId,
    pub name: String,
    pub email: String,
}

impl Respondent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: RespondentId::new(id),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A respondent with their latest result
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub respondent: Respondent,
    pub record: ResultRecord,
}

impl Profile {
    pub fn type_code(&self) -> TypeCode {
        self.record.type_code()
    }

    fn matches(&self, query: &DirectoryQuery) -> bool {
        if let Some(term) = query.search_term() {
            let name = self.respondent.name.to_lowercase();
            let email = self.respondent.email.to_lowercase();
            if !name.contains(&term) && !email.contains(&term) {
                return false;
            }
        }
        query.types.is_empty() || query.types.contains(&self.type_code())
    }
}

/// Filter for listing profiles.
///
/// Search matches name or email, case-insensitively. An empty type set
/// matches every type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub search: Option<String>,
    pub types: BTreeSet<TypeCode>,
}

impl DirectoryQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_type(mut self, code: TypeCode) -> Self {
        self.types.insert(code);
        self
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }
}

/// Latest results for a team.
#[derive(Debug, Default)]
pub struct TeamDirectory {
    profiles: HashMap<RespondentId, Profile>,
    bindings: HashMap<SessionId, Respondent>,
    unassigned: Vec<ResultRecord>,
}

impl TeamDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attribute a session's future result to a respondent.
    pub fn bind(&mut self, session_id: SessionId, respondent: Respondent) {
        debug!(session_id = %session_id, respondent = %respondent.id, "Session bound");
        self.bindings.insert(session_id, respondent);
    }

    /// File a record under its bound respondent.
    ///
    /// Records for unbound sessions are kept aside. Returns the profile the
    /// record landed in, if any.
    pub fn record(&mut self, record: ResultRecord) -> Option<&Profile> {
        match self.bindings.remove(&record.session_id) {
            Some(respondent) => Some(self.assign(respondent, record)),
            None => {
                debug!(session_id = %record.session_id, "Result for unbound session");
                self.unassigned.push(record);
                None
            }
        }
    }

    /// Store a record as a respondent's result unless a newer one exists.
    pub fn assign(&mut self, respondent: Respondent, record: ResultRecord) -> &Profile {
        let id = respondent.id.clone();
        let replace = self
            .profiles
            .get(&id)
            .map_or(true, |p| record.created_at >= p.record.created_at);

        if replace {
            info!(
                respondent = %id,
                type_code = %record.type_code(),
                "Team profile updated"
            );
            self.profiles.insert(id.clone(), Profile { respondent, record });
        }
        &self.profiles[&id]
    }

    pub fn profile(&self, id: &RespondentId) -> Option<&Profile> {
        self.profiles.get(id)
    }

    /// Matching profiles, ordered by name then id.
    pub fn list(&self, query: &DirectoryQuery) -> Vec<&Profile> {
        let mut matches: Vec<&Profile> = self
            .profiles
            .values()
            .filter(|p| p.matches(query))
            .collect();
        matches.sort_by(|a, b| {
            a.respondent
                .name
                .cmp(&b.respondent.name)
                .then_with(|| a.respondent.id.cmp(&b.respondent.id))
        });
        matches
    }

    /// Distinct type codes present, sorted.
    pub fn types(&self) -> Vec<TypeCode> {
        self.profiles
            .values()
            .map(Profile::type_code)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn unassigned(&self) -> &[ResultRecord] {
        &self.unassigned
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// Shared handle that lets a [`TeamDirectory`] receive engine results.
#[derive(Clone, Debug, Default)]
pub struct DirectorySink {
    directory: Arc<RwLock<TeamDirectory>>,
}

impl DirectorySink {
    pub fn new(directory: TeamDirectory) -> Self {
        Self {
            directory: Arc::new(RwLock::new(directory)),
        }
    }

    pub fn directory(&self) -> &Arc<RwLock<TeamDirectory>> {
        &self.directory
    }
}

#[async_trait]
impl ResultSink for DirectorySink {
    async fn persist(&self, record: &ResultRecord) -> Result<(), SinkError> {
        self.directory.write().await.record(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use compass_questions::{ItemBank, QuestionSetProvider};
    use compass_scoring::Scorer;
    use compass_types::{Answer, AssessmentResult, Axis, Pole, Seed};

    fn result_for(poles: [Pole; 4]) -> AssessmentResult {
        let set = ItemBank::standard()
            .with_items_per_axis(1)
            .question_set(&Seed::Numeric(1))
            .unwrap();
        let answers: Vec<Answer> = set
            .iter()
            .map(|q| {
                let pole = poles[q.axis().index()];
                let option = q.option_for_pole(pole).unwrap();
                Answer::new(q.id.clone(), option.value.clone(), pole)
            })
            .collect();
        Scorer::default().score(&set, &answers).unwrap()
    }

    fn record(session: &str, poles: [Pole; 4]) -> ResultRecord {
        ResultRecord::new(
            SessionId::new(session),
            Seed::Numeric(1),
            result_for(poles),
            "summary",
            None,
        )
    }

    const ENTJ: [Pole; 4] = [Pole::E, Pole::N, Pole::T, Pole::J];
    const ISFP: [Pole; 4] = [Pole::I, Pole::S, Pole::F, Pole::P];

    fn team() -> TeamDirectory {
        let mut directory = TeamDirectory::new();
        directory.assign(
            Respondent::new("u1", "Ada Lovelace", "ada@example.com"),
            record("s1", ENTJ),
        );
        directory.assign(
            Respondent::new("u2", "Grace Hopper", "grace@navy.example"),
            record("s2", ISFP),
        );
        directory.assign(
            Respondent::new("u3", "Alan Turing", "alan@example.com"),
            record("s3", ENTJ),
        );
        directory
    }

    #[test]
    fn test_bound_record_lands_in_profile() {
        let mut directory = TeamDirectory::new();
        directory.bind(
            SessionId::new("s1"),
            Respondent::new("u1", "Ada", "ada@example.com"),
        );
        let profile = directory.record(record("s1", ENTJ)).unwrap();
        assert_eq!(profile.type_code().to_string(), "ENTJ");
        assert!(directory.unassigned().is_empty());

        assert!(directory.record(record("s9", ISFP)).is_none());
        assert_eq!(directory.unassigned().len(), 1);
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_latest_result_wins() {
        let mut directory = TeamDirectory::new();
        let ada = Respondent::new("u1", "Ada", "ada@example.com");

        let newer = record("s2", ISFP);
        let mut older = record("s1", ENTJ);
        older.created_at = newer.created_at - Duration::days(1);

        directory.assign(ada.clone(), newer);
        directory.assign(ada.clone(), older);
        assert_eq!(
            directory.profile(&ada.id).unwrap().type_code().to_string(),
            "ISFP"
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let directory = team();
        let hits = directory.list(&DirectoryQuery::all().search("ADA"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].respondent.name, "Ada Lovelace");

        let by_email = directory.list(&DirectoryQuery::all().search("navy"));
        assert_eq!(by_email[0].respondent.name, "Grace Hopper");

        assert_eq!(directory.list(&DirectoryQuery::all().search("  ")).len(), 3);
    }

    #[test]
    fn test_type_filter_and_order() {
        let directory = team();
        let entj = TypeCode::from_poles(compass_types::PerAxis::from_fn(|axis: Axis| {
            ENTJ[axis.index()]
        }));
        let hits = directory.list(&DirectoryQuery::all().with_type(entj));
        let names: Vec<&str> = hits.iter().map(|p| p.respondent.name.as_str()).collect();
        assert_eq!(names, vec!["Ada Lovelace", "Alan Turing"]);

        let combined = directory.list(&DirectoryQuery::all().with_type(entj).search("alan"));
        assert_eq!(combined.len(), 1);
    }

    #[test]
    fn test_distinct_types_sorted() {
        let types: Vec<String> = team().types().iter().map(ToString::to_string).collect();
        assert_eq!(types, vec!["ENTJ", "ISFP"]);
    }

    #[tokio::test]
    async fn test_directory_sink_records() {
        let sink = DirectorySink::default();
        sink.directory().write().await.bind(
            SessionId::new("s1"),
            Respondent::new("u1", "Ada", "ada@example.com"),
        );
        sink.persist(&record("s1", ENTJ)).await.unwrap();
        assert_eq!(sink.directory().read().await.len(), 1);
    }
}
