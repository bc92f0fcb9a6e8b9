//! The async driver tying the engine, a lookup client and a form binding
//! together.
//!
//! All user-facing entry points funnel into [`CascadeController::dispatch`],
//! which runs the engine's synthesized event chain to quiescence: apply the
//! effects of a transition, follow its `next` event, and resolve at most one
//! lookup per step. Lookup failures are converted into `LookupFailed` events
//! rather than surfaced as errors; only the form binding can fail a
//! dispatch.

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::cascade::{CascadeEngine, CascadeEvent, CascadeLevel, LookupRequest};
use crate::effects::FormBinding;
use crate::lookup::LookupClient;
use crate::state::{CascadeState, InitialValues};
use crate::types::{CountyId, DistrictId, LocationOption};

pub struct CascadeController<L, F> {
    engine: CascadeEngine,
    state: CascadeState,
    lookup: L,
    form: F,
}

impl<L, F> CascadeController<L, F>
where
    L: LookupClient,
    L::Error: Debug,
    F: FormBinding,
{
    pub fn new(lookup: L, form: F) -> Self {
        CascadeController {
            engine: CascadeEngine::new(),
            state: CascadeState::new(),
            lookup,
            form,
        }
    }

    pub fn state(&self) -> &CascadeState {
        &self.state
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Suggestions for the school-name input against the loaded candidates.
    pub fn suggestions(&self, term: &str) -> Vec<LocationOption> {
        self.state
            .autocomplete()
            .suggestions(term)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Captures the server-rendered values and replays them, restoring a
    /// saved selection through the same path a user's edits take.
    pub async fn initialize(&mut self, initial: InitialValues) -> Result<(), F::Error> {
        self.dispatch(CascadeEvent::Initialize { initial }).await
    }

    pub async fn on_county_change(&mut self, county: Option<CountyId>) -> Result<(), F::Error> {
        self.dispatch(CascadeEvent::CountyChanged { county }).await
    }

    pub async fn on_district_change(
        &mut self,
        district: Option<DistrictId>,
    ) -> Result<(), F::Error> {
        self.dispatch(CascadeEvent::DistrictChanged { district })
            .await
    }

    pub async fn on_school_name_commit(
        &mut self,
        text: impl Into<String>,
    ) -> Result<(), F::Error> {
        self.dispatch(CascadeEvent::SchoolNameCommitted { text: text.into() })
            .await
    }

    pub async fn on_school_pick(&mut self, option: LocationOption) -> Result<(), F::Error> {
        self.dispatch(CascadeEvent::SchoolPicked { option }).await
    }

    pub async fn on_no_school_toggle(&mut self, checked: bool) -> Result<(), F::Error> {
        self.dispatch(CascadeEvent::NoSchoolToggled { checked })
            .await
    }

    pub async fn on_not_found_toggle(&mut self, checked: bool) -> Result<(), F::Error> {
        self.dispatch(CascadeEvent::NotFoundToggled { checked })
            .await
    }

    async fn dispatch(&mut self, event: CascadeEvent) -> Result<(), F::Error> {
        let mut queue = VecDeque::new();
        queue.push_back(event);

        while let Some(event) = queue.pop_front() {
            let transition = self.engine.handle(&mut self.state, event);
            for effect in transition.effects {
                self.form.apply(effect)?;
            }
            if let Some(next) = transition.next {
                queue.push_back(next);
            }
            if let Some(request) = transition.lookup {
                queue.push_back(self.run_lookup(request).await);
            }
        }
        Ok(())
    }

    async fn run_lookup(&self, request: LookupRequest) -> CascadeEvent {
        match request {
            LookupRequest::Districts { county, generation } => {
                match self.lookup.fetch_districts(&county).await {
                    Ok(options) => CascadeEvent::DistrictsLoaded {
                        county,
                        generation,
                        options,
                    },
                    Err(error) => {
                        tracing::warn!(?error, county = %county.0, "district lookup failed");
                        CascadeEvent::LookupFailed {
                            level: CascadeLevel::District,
                            generation,
                        }
                    }
                }
            }
            LookupRequest::Schools {
                district,
                generation,
            } => match self.lookup.fetch_schools(&district).await {
                Ok(options) => CascadeEvent::SchoolsLoaded {
                    district,
                    generation,
                    options,
                },
                Err(error) => {
                    tracing::warn!(?error, district = %district.0, "school lookup failed");
                    CascadeEvent::LookupFailed {
                        level: CascadeLevel::School,
                        generation,
                    }
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::effects::{GradeLock, NO_SCHOOL_GRADE};
    use crate::form::FormModel;
    use crate::state::OverrideMode;
    use crate::types::SchoolId;

    use super::*;

    /// Map-backed lookup client; missing keys are an error, which is how
    /// endpoint failures reach the controller.
    struct MapLookup {
        districts: HashMap<String, Vec<LocationOption>>,
        schools: HashMap<String, Vec<LocationOption>>,
    }

    impl MapLookup {
        fn slovakia() -> Self {
            let mut districts = HashMap::new();
            districts.insert(
                "2".to_string(),
                vec![
                    LocationOption::new("205", "Košice I"),
                    LocationOption::new("206", "Košice II"),
                ],
            );
            districts.insert(
                "9".to_string(),
                vec![LocationOption::new("901", "Zahraničie")],
            );

            let mut schools = HashMap::new();
            schools.insert(
                "205".to_string(),
                vec![
                    LocationOption::new("3001", "Gymnázium Poštová 9, Košice"),
                    LocationOption::new("3002", "Základná škola Staničná 13, Košice"),
                ],
            );
            schools.insert("901".to_string(), Vec::new());

            MapLookup { districts, schools }
        }
    }

    impl LookupClient for MapLookup {
        type Error = String;

        async fn fetch_districts(
            &self,
            county: &CountyId,
        ) -> Result<Vec<LocationOption>, String> {
            self.districts
                .get(&county.0)
                .cloned()
                .ok_or_else(|| format!("no districts for county {}", county.0))
        }

        async fn fetch_schools(
            &self,
            district: &DistrictId,
        ) -> Result<Vec<LocationOption>, String> {
            self.schools
                .get(&district.0)
                .cloned()
                .ok_or_else(|| format!("no schools for district {}", district.0))
        }
    }

    fn controller() -> CascadeController<MapLookup, FormModel> {
        CascadeController::new(MapLookup::slovakia(), FormModel::new())
    }

    #[tokio::test]
    async fn fresh_form_starts_with_dependents_disabled() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();

        assert!(c.form().county.enabled);
        assert!(!c.form().district.enabled);
        assert!(!c.form().school_name.enabled);
        assert!(!c.form().not_found_box.enabled);
        assert!(c.form().no_school_box.enabled);
        assert!(!c.form().info_panel_visible);
    }

    #[tokio::test]
    async fn county_selection_populates_and_enables_district() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();
        c.on_county_change(Some(CountyId::new("2"))).await.unwrap();

        assert!(c.form().district.enabled);
        assert_eq!(c.form().district.options.len(), 2);
        assert!(c.form().district.value.is_none());
        // School controls stay down until a district is picked.
        assert!(!c.form().school_name.enabled);
    }

    #[tokio::test]
    async fn clearing_county_tears_the_cascade_down() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();
        c.on_county_change(Some(CountyId::new("2"))).await.unwrap();
        c.on_district_change(Some(DistrictId::new("205")))
            .await
            .unwrap();
        c.on_county_change(None).await.unwrap();

        assert!(c.form().district.options.is_empty());
        assert!(!c.form().district.enabled);
        assert!(!c.form().school_name.enabled);
        assert!(c.state().district.is_none());
        assert!(c.state().school.is_none());
        assert!(c.state().schools.is_empty());
    }

    #[tokio::test]
    async fn district_selection_loads_candidates_and_enables_school_input() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();
        c.on_county_change(Some(CountyId::new("2"))).await.unwrap();
        c.on_district_change(Some(DistrictId::new("205")))
            .await
            .unwrap();

        assert!(c.form().school_name.enabled);
        assert!(c.form().not_found_box.enabled);
        assert_eq!(c.state().schools.len(), 2);
        assert_eq!(c.suggestions("postova").len(), 1);
    }

    #[tokio::test]
    async fn abroad_county_forces_the_fixed_district() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();
        c.on_county_change(Some(CountyId::abroad())).await.unwrap();

        assert_eq!(c.form().district.value, Some(DistrictId::abroad()));
        assert!(!c.form().district.enabled);
        // The abroad district's (empty) school list was fetched.
        assert!(c.form().school_name.enabled);
        assert!(c.state().schools.is_empty());
    }

    #[tokio::test]
    async fn edit_mode_restores_the_saved_selection() {
        let mut c = controller();
        c.initialize(InitialValues {
            county: Some(CountyId::new("2")),
            district: Some(DistrictId::new("205")),
            school: Some(SchoolId::new("3001")),
            school_name: Some("Gymnázium Poštová 9, Košice".to_string()),
        })
        .await
        .unwrap();

        assert_eq!(c.form().district.value, Some(DistrictId::new("205")));
        assert_eq!(c.state().school, Some(SchoolId::new("3001")));
        assert_eq!(
            c.form().school_name.value.as_deref(),
            Some("Gymnázium Poštová 9, Košice")
        );
        assert!(c.state().pending_restore.is_empty());
    }

    #[tokio::test]
    async fn restore_happens_once_only() {
        let mut c = controller();
        c.initialize(InitialValues {
            county: Some(CountyId::new("2")),
            district: Some(DistrictId::new("205")),
            school: Some(SchoolId::new("3001")),
            school_name: Some("Gymnázium Poštová 9, Košice".to_string()),
        })
        .await
        .unwrap();

        // Re-selecting the same county repopulates but must not re-apply
        // the initial district.
        c.on_county_change(Some(CountyId::new("2"))).await.unwrap();
        assert!(c.form().district.value.is_none());
        assert!(c.state().school.is_none());
    }

    #[tokio::test]
    async fn no_school_override_forces_sentinels_and_grade() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();
        c.on_no_school_toggle(true).await.unwrap();

        assert_eq!(c.state().override_mode, OverrideMode::NoSchool);
        assert_eq!(c.state().school, Some(SchoolId::no_school()));
        assert_eq!(c.form().district.value, Some(DistrictId::no_school_default()));
        assert!(!c.form().county.enabled);
        assert!(!c.form().not_found_box.enabled);
        assert_eq!(c.form().grade.value, Some(NO_SCHOOL_GRADE));
        assert_eq!(c.form().grade.lock, GradeLock::NoSchoolOnly);

        c.on_no_school_toggle(false).await.unwrap();
        assert_eq!(c.state().override_mode, OverrideMode::Normal);
        assert!(c.form().county.enabled);
        assert_eq!(c.form().grade.lock, GradeLock::Standard);
        assert!(c.form().grade.value.is_none());
    }

    #[tokio::test]
    async fn not_found_override_shows_panel_and_blocks_no_school() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();
        c.on_county_change(Some(CountyId::new("2"))).await.unwrap();
        c.on_district_change(Some(DistrictId::new("205")))
            .await
            .unwrap();
        c.on_not_found_toggle(true).await.unwrap();

        assert_eq!(c.state().override_mode, OverrideMode::NotFound);
        assert_eq!(c.state().school, Some(SchoolId::not_found()));
        assert!(c.form().info_panel_visible);
        assert!(!c.form().no_school_box.enabled);
        assert!(!c.form().school_name.enabled);

        // The other override cannot be entered while this one is active.
        c.on_no_school_toggle(true).await.unwrap();
        assert_eq!(c.state().override_mode, OverrideMode::NotFound);

        c.on_not_found_toggle(false).await.unwrap();
        assert_eq!(c.state().override_mode, OverrideMode::Normal);
        assert!(!c.form().info_panel_visible);
        assert!(c.form().no_school_box.enabled);
    }

    #[tokio::test]
    async fn committing_an_exact_label_binds_the_identifier() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();
        c.on_county_change(Some(CountyId::new("2"))).await.unwrap();
        c.on_district_change(Some(DistrictId::new("205")))
            .await
            .unwrap();
        c.on_school_name_commit("Gymnázium Poštová 9, Košice")
            .await
            .unwrap();

        assert_eq!(c.state().school, Some(SchoolId::new("3001")));
        assert_eq!(c.form().school, Some(SchoolId::new("3001")));
    }

    #[tokio::test]
    async fn committing_free_text_clears_the_identifier() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();
        c.on_county_change(Some(CountyId::new("2"))).await.unwrap();
        c.on_district_change(Some(DistrictId::new("205")))
            .await
            .unwrap();
        c.on_school_pick(LocationOption::new("3001", "Gymnázium Poštová 9, Košice"))
            .await
            .unwrap();
        assert_eq!(c.state().school, Some(SchoolId::new("3001")));

        c.on_school_name_commit("Gymnázium Poštov").await.unwrap();
        assert!(c.state().school.is_none());
        assert!(c.form().school.is_none());
        assert!(c.form().school_name.value.is_none());
    }

    #[tokio::test]
    async fn failing_lookup_leaves_pre_request_state() {
        let mut c = controller();
        c.initialize(InitialValues::default()).await.unwrap();
        // County "7" is not in the fixture map, so the fetch errors.
        c.on_county_change(Some(CountyId::new("7"))).await.unwrap();

        assert_eq!(c.state().county, Some(CountyId::new("7")));
        assert!(c.state().district.is_none());
        assert!(c.form().district.options.is_empty());
        assert!(!c.form().district.enabled);
    }
}
