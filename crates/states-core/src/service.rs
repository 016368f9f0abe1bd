//! [`FunFactService`] — merge-and-mutate logic over the catalog and store.
//!
//! Every operation takes a code that already passed
//! [`StateCatalog::resolve`]; the service re-checks the catalog only as
//! defense in depth. Mutations are plain read-modify-write cycles with no
//! cross-request coordination: two concurrent mutations of the same state
//! can lose an update, matching the store contract (see
//! [`crate::store::FunFactStore`]).

use std::sync::Arc;

use rand::Rng as _;

use crate::{
  Error, Result,
  catalog::StateCatalog,
  funfact::{FunFactRecord, resolve_index},
  state::{
    AdmissionView, CapitalView, MergedState, NicknameView, PopulationView,
    format_population,
  },
  store::FunFactStore,
};

/// A single fun fact, as returned by [`FunFactService::random_fact`].
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FunFact {
  pub funfact: String,
}

pub struct FunFactService<S> {
  catalog: Arc<StateCatalog>,
  store:   Arc<S>,
}

// Arc fields, so derive(Clone) would wrongly require S: Clone.
impl<S> Clone for FunFactService<S> {
  fn clone(&self) -> Self {
    Self { catalog: Arc::clone(&self.catalog), store: Arc::clone(&self.store) }
  }
}

impl<S> FunFactService<S>
where
  S: FunFactStore,
{
  pub fn new(catalog: Arc<StateCatalog>, store: Arc<S>) -> Self {
    Self { catalog, store }
  }

  pub fn catalog(&self) -> &StateCatalog {
    &self.catalog
  }

  /// Look up the catalog entry for a validated code, or [`Error::NotFound`].
  fn record(&self, code: &str) -> Result<&crate::state::StateRecord> {
    self
      .catalog
      .get(code)
      .ok_or_else(|| Error::NotFound(code.to_owned()))
  }

  /// Fetch the fact record for a state, mapping absence and emptiness to
  /// [`Error::NoFactsAvailable`] with the state's display name.
  async fn require_facts(&self, code: &str, state: &str) -> Result<FunFactRecord> {
    let record = self
      .store
      .find_by_code(code)
      .await
      .map_err(Error::storage)?;
    match record {
      Some(r) if !r.funfacts.is_empty() => Ok(r),
      _ => Err(Error::NoFactsAvailable { state: state.to_owned() }),
    }
  }

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Every state record, optionally filtered by the contiguous flag, each
  /// merged with its stored fun facts. One store scan for the whole list.
  pub async fn list_all(&self, contiguous: Option<bool>) -> Result<Vec<MergedState>> {
    let stored = self.store.find_all().await.map_err(Error::storage)?;

    let merged = self
      .catalog
      .list(contiguous)
      .into_iter()
      .map(|st| {
        let facts = stored
          .iter()
          .find(|r| r.state_code == st.code)
          .map(|r| r.funfacts.clone());
        MergedState::new(st.clone(), facts)
      })
      .collect();

    Ok(merged)
  }

  /// The merged record for one state.
  pub async fn get_one(&self, code: &str) -> Result<MergedState> {
    let record = self.record(code)?.clone();
    let stored = self
      .store
      .find_by_code(code)
      .await
      .map_err(Error::storage)?;
    Ok(MergedState::new(record, stored.map(|r| r.funfacts)))
  }

  /// One fact chosen uniformly at random from the state's list.
  pub async fn random_fact(&self, code: &str) -> Result<FunFact> {
    let state = self.record(code)?.name.clone();
    let record = self.require_facts(code, &state).await?;

    let pick = rand::thread_rng().gen_range(0..record.funfacts.len());
    Ok(FunFact { funfact: record.funfacts[pick].clone() })
  }

  // ── Per-field reference views ─────────────────────────────────────────

  pub fn capital(&self, code: &str) -> Result<CapitalView> {
    let st = self.record(code)?;
    Ok(CapitalView { state: st.name.clone(), capital: st.capital.clone() })
  }

  pub fn nickname(&self, code: &str) -> Result<NicknameView> {
    let st = self.record(code)?;
    Ok(NicknameView { state: st.name.clone(), nickname: st.nickname.clone() })
  }

  pub fn population(&self, code: &str) -> Result<PopulationView> {
    let st = self.record(code)?;
    Ok(PopulationView {
      state:      st.name.clone(),
      population: format_population(st.population),
    })
  }

  pub fn admission(&self, code: &str) -> Result<AdmissionView> {
    let st = self.record(code)?;
    Ok(AdmissionView { state: st.name.clone(), admitted: st.admission_date })
  }

  // ── Mutations ─────────────────────────────────────────────────────────

  /// Append `funfacts` to the state's list, creating the record on first
  /// add. Returns the persisted record.
  pub async fn add_facts(
    &self,
    code: &str,
    funfacts: Vec<String>,
  ) -> Result<FunFactRecord> {
    if funfacts.is_empty() {
      return Err(Error::InvalidInput(
        "State fun facts value required".to_owned(),
      ));
    }
    self.record(code)?;

    let existing = self
      .store
      .find_by_code(code)
      .await
      .map_err(Error::storage)?;

    match existing {
      None => self
        .store
        .create(code.to_owned(), funfacts)
        .await
        .map_err(Error::storage),
      Some(mut record) => {
        record.funfacts.extend(funfacts);
        self.store.save(record).await.map_err(Error::storage)
      }
    }
  }

  /// Replace the fact at the 1-based `index` with `funfact` and persist.
  pub async fn update_fact(
    &self,
    code: &str,
    index: i64,
    funfact: String,
  ) -> Result<FunFactRecord> {
    if funfact.is_empty() {
      return Err(Error::InvalidInput("State fun fact value required".to_owned()));
    }
    let state = self.record(code)?.name.clone();

    let mut record = self.require_facts(code, &state).await?;
    let pos = resolve_index(&state, index, record.funfacts.len())?;
    record.funfacts[pos] = funfact;

    self.store.save(record).await.map_err(Error::storage)
  }

  /// Remove the fact at the 1-based `index`, shifting the tail left, and
  /// persist. The record itself stays even when the list becomes empty.
  pub async fn delete_fact(&self, code: &str, index: i64) -> Result<FunFactRecord> {
    let state = self.record(code)?.name.clone();

    let mut record = self.require_facts(code, &state).await?;
    let pos = resolve_index(&state, index, record.funfacts.len())?;
    record.funfacts.remove(pos);

    self.store.save(record).await.map_err(Error::storage)
  }
}

#[cfg(test)]
mod tests {
  use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
  };

  use super::FunFactService;
  use crate::{
    Error, catalog::StateCatalog, funfact::FunFactRecord, store::FunFactStore,
  };

  /// In-memory store for exercising the service without a database.
  #[derive(Default)]
  struct MemoryStore {
    records: Mutex<BTreeMap<String, Vec<String>>>,
  }

  impl FunFactStore for MemoryStore {
    type Error = std::convert::Infallible;

    async fn find_by_code(&self, code: &str) -> Result<Option<FunFactRecord>, Self::Error> {
      let records = self.records.lock().unwrap();
      Ok(
        records
          .get(code)
          .map(|f| FunFactRecord::new(code, f.clone())),
      )
    }

    async fn create(
      &self,
      code: String,
      funfacts: Vec<String>,
    ) -> Result<FunFactRecord, Self::Error> {
      let mut records = self.records.lock().unwrap();
      records.insert(code.clone(), funfacts.clone());
      Ok(FunFactRecord::new(code, funfacts))
    }

    async fn save(&self, record: FunFactRecord) -> Result<FunFactRecord, Self::Error> {
      let mut records = self.records.lock().unwrap();
      records.insert(record.state_code.clone(), record.funfacts.clone());
      Ok(record)
    }

    async fn find_all(&self) -> Result<Vec<FunFactRecord>, Self::Error> {
      let records = self.records.lock().unwrap();
      Ok(
        records
          .iter()
          .map(|(code, facts)| FunFactRecord::new(code.clone(), facts.clone()))
          .collect(),
      )
    }
  }

  fn service() -> FunFactService<MemoryStore> {
    let catalog = Arc::new(StateCatalog::embedded().unwrap());
    FunFactService::new(catalog, Arc::new(MemoryStore::default()))
  }

  fn facts(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
  }

  // ── add_facts ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn add_creates_record_on_first_add() {
    let svc = service();
    let record = svc
      .add_facts("GA", facts(&["Fact A", "Fact B"]))
      .await
      .unwrap();
    assert_eq!(record.state_code, "GA");
    assert_eq!(record.funfacts, facts(&["Fact A", "Fact B"]));
  }

  #[tokio::test]
  async fn add_appends_preserving_order() {
    let svc = service();
    svc.add_facts("GA", facts(&["Fact A"])).await.unwrap();
    let record = svc
      .add_facts("GA", facts(&["Fact B", "Fact C"]))
      .await
      .unwrap();
    assert_eq!(record.funfacts, facts(&["Fact A", "Fact B", "Fact C"]));
  }

  #[tokio::test]
  async fn add_rejects_empty_input() {
    let svc = service();
    let err = svc.add_facts("GA", vec![]).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
  }

  #[tokio::test]
  async fn add_rejects_unknown_code_before_store_write() {
    let svc = service();
    let err = svc.add_facts("ZZ", facts(&["x"])).await.unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert!(svc.store.records.lock().unwrap().is_empty());
  }

  // ── update_fact ───────────────────────────────────────────────────────

  #[tokio::test]
  async fn update_replaces_in_place() {
    let svc = service();
    svc.add_facts("GA", facts(&["Fact A", "Fact B"])).await.unwrap();

    svc
      .update_fact("GA", 2, "Fact B revised".to_owned())
      .await
      .unwrap();

    let merged = svc.get_one("GA").await.unwrap();
    assert_eq!(
      merged.funfacts.unwrap(),
      facts(&["Fact A", "Fact B revised"])
    );
  }

  #[tokio::test]
  async fn update_without_record_is_no_facts_available() {
    let svc = service();
    let err = svc.update_fact("GA", 1, "x".to_owned()).await.unwrap_err();
    match err {
      Error::NoFactsAvailable { state } => assert_eq!(state, "Georgia"),
      other => panic!("expected NoFactsAvailable, got {other:?}"),
    }
  }

  #[tokio::test]
  async fn update_out_of_range_leaves_list_untouched() {
    let svc = service();
    svc.add_facts("GA", facts(&["Fact A"])).await.unwrap();

    for index in [0, -1, 2] {
      let err = svc
        .update_fact("GA", index, "nope".to_owned())
        .await
        .unwrap_err();
      assert!(matches!(err, Error::IndexOutOfRange { .. }));
    }

    let merged = svc.get_one("GA").await.unwrap();
    assert_eq!(merged.funfacts.unwrap(), facts(&["Fact A"]));
  }

  #[tokio::test]
  async fn update_rejects_empty_value() {
    let svc = service();
    svc.add_facts("GA", facts(&["Fact A"])).await.unwrap();
    let err = svc.update_fact("GA", 1, String::new()).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
  }

  // ── delete_fact ───────────────────────────────────────────────────────

  #[tokio::test]
  async fn delete_shifts_tail_left() {
    let svc = service();
    svc
      .add_facts("GA", facts(&["Fact A", "Fact B revised"]))
      .await
      .unwrap();

    let record = svc.delete_fact("GA", 1).await.unwrap();
    assert_eq!(record.funfacts, facts(&["Fact B revised"]));
  }

  #[tokio::test]
  async fn delete_out_of_range_performs_no_mutation() {
    let svc = service();
    svc.add_facts("GA", facts(&["only"])).await.unwrap();

    for index in [0, -3, 2] {
      let err = svc.delete_fact("GA", index).await.unwrap_err();
      assert!(matches!(err, Error::IndexOutOfRange { .. }));
    }

    let merged = svc.get_one("GA").await.unwrap();
    assert_eq!(merged.funfacts.unwrap(), facts(&["only"]));
  }

  #[tokio::test]
  async fn delete_to_empty_keeps_the_record() {
    let svc = service();
    svc.add_facts("GA", facts(&["only"])).await.unwrap();
    svc.delete_fact("GA", 1).await.unwrap();

    let merged = svc.get_one("GA").await.unwrap();
    assert_eq!(merged.funfacts.unwrap(), Vec::<String>::new());

    // And the now-empty record reads as "no facts".
    let err = svc.delete_fact("GA", 1).await.unwrap_err();
    assert!(matches!(err, Error::NoFactsAvailable { .. }));
  }

  // ── random_fact ───────────────────────────────────────────────────────

  #[tokio::test]
  async fn random_fact_is_always_a_member() {
    let svc = service();
    let pool = facts(&["one", "two", "three"]);
    svc.add_facts("GA", pool.clone()).await.unwrap();

    for _ in 0..50 {
      let fact = svc.random_fact("GA").await.unwrap();
      assert!(pool.contains(&fact.funfact));
    }
  }

  #[tokio::test]
  async fn random_fact_without_facts_names_the_state() {
    let svc = service();
    let err = svc.random_fact("HI").await.unwrap_err();
    match err {
      Error::NoFactsAvailable { state } => assert_eq!(state, "Hawaii"),
      other => panic!("expected NoFactsAvailable, got {other:?}"),
    }
  }

  // ── reads ─────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn list_all_merges_only_states_with_records() {
    let svc = service();
    svc.add_facts("GA", facts(&["peaches"])).await.unwrap();

    let all = svc.list_all(None).await.unwrap();
    assert_eq!(all.len(), 50);

    let ga = all.iter().find(|m| m.record.code == "GA").unwrap();
    assert_eq!(ga.funfacts.as_deref().unwrap(), facts(&["peaches"]));
    let hi = all.iter().find(|m| m.record.code == "HI").unwrap();
    assert!(hi.funfacts.is_none());
  }

  #[tokio::test]
  async fn list_all_honours_contiguous_filter() {
    let svc = service();
    assert_eq!(svc.list_all(Some(true)).await.unwrap().len(), 48);
    assert_eq!(svc.list_all(Some(false)).await.unwrap().len(), 2);
  }

  // ── per-field views ───────────────────────────────────────────────────

  #[tokio::test]
  async fn reference_views() {
    let svc = service();

    let capital = svc.capital("GA").unwrap();
    assert_eq!(capital.capital, "Atlanta");

    let nickname = svc.nickname("GA").unwrap();
    assert_eq!(nickname.nickname, "Peach State");

    let population = svc.population("GA").unwrap();
    assert_eq!(population.population, "10,711,908");

    let admission = svc.admission("GA").unwrap();
    assert_eq!(admission.admitted.to_string(), "1788-01-02");
  }
}
