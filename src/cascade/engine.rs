//! The pure cascade state machine.
//!
//! `CascadeEngine` computes state transitions and returns effects to be
//! applied by a form binding. It performs no I/O: lookups leave the engine
//! as [`LookupRequest`] values and come back as completion events.

use crate::effects::{FormControl, FormEffect, GradeLock, NO_SCHOOL_GRADE, OverrideFlag};
use crate::state::{CascadeState, InitialValues, OverrideMode, PendingRestore};
use crate::types::{CountyId, DistrictId, LocationOption, SchoolId};

use super::events::{CascadeEvent, CascadeLevel, LookupRequest};

/// Fixed values the engine forces into the form.
///
/// Defaults match the production form: county `"9"` is abroad with district
/// `"901"`, the no-school district default is `"0"`, and the forced display
/// names are the Slovak literals.
#[derive(Debug, Clone)]
pub struct CascadeContext {
    pub abroad_county: CountyId,
    pub abroad_district: DistrictId,
    pub no_school_district: DistrictId,
    pub no_school_label: String,
    pub not_found_label: String,
}

impl Default for CascadeContext {
    fn default() -> Self {
        CascadeContext {
            abroad_county: CountyId::abroad(),
            abroad_district: DistrictId::abroad(),
            no_school_district: DistrictId::no_school_default(),
            no_school_label: "Bez školy".to_string(),
            not_found_label: "Iná škola".to_string(),
        }
    }
}

/// The result of handling one event.
///
/// `lookup` and `next` may both be present; the driver applies effects
/// first, then processes `next`, then feeds the lookup's completion back
/// in. (The engine currently never sets both on a single transition.)
#[derive(Debug, Default)]
pub struct Transition {
    /// Form mutations to apply, in order.
    pub effects: Vec<FormEffect>,

    /// A lookup to perform, if this event issued one.
    pub lookup: Option<LookupRequest>,

    /// A synthesized follow-up event cascading the change downstream.
    pub next: Option<CascadeEvent>,
}

impl Transition {
    fn effects(effects: Vec<FormEffect>) -> Self {
        Transition {
            effects,
            ..Transition::default()
        }
    }
}

/// The cascade engine.
///
/// Stateless apart from its fixed context; all mutable state is passed in
/// explicitly, which keeps every transition testable without a form or a
/// network.
#[derive(Debug, Clone, Default)]
pub struct CascadeEngine {
    ctx: CascadeContext,
}

impl CascadeEngine {
    pub fn new() -> Self {
        CascadeEngine::default()
    }

    pub fn with_context(ctx: CascadeContext) -> Self {
        CascadeEngine { ctx }
    }

    pub fn context(&self) -> &CascadeContext {
        &self.ctx
    }

    /// Handles one event against the current state.
    pub fn handle(&self, state: &mut CascadeState, event: CascadeEvent) -> Transition {
        match event {
            CascadeEvent::Initialize { initial } => self.initialize(state, initial),
            CascadeEvent::CountyChanged { county } => self.county_changed(state, county),
            CascadeEvent::DistrictsLoaded {
                county,
                generation,
                options,
            } => self.districts_loaded(state, county, generation, options),
            CascadeEvent::DistrictChanged { district } => self.district_changed(state, district),
            CascadeEvent::SchoolsLoaded {
                district,
                generation,
                options,
            } => self.schools_loaded(state, district, generation, options),
            CascadeEvent::LookupFailed { level, generation } => {
                self.lookup_failed(state, level, generation)
            }
            CascadeEvent::SchoolNameCommitted { text } => {
                self.school_name_committed(state, text)
            }
            CascadeEvent::SchoolPicked { option } => self.school_picked(state, option),
            CascadeEvent::NoSchoolToggled { checked } => self.no_school_toggled(state, checked),
            CascadeEvent::NotFoundToggled { checked } => self.not_found_toggled(state, checked),
        }
    }

    /// Captures initial values and starts edit-mode restoration.
    ///
    /// A saved school of `"1"` or `"0"` re-enters the matching override.
    /// Otherwise, a present county synthesizes a county change with the
    /// restore pending; with no county the dependent controls start
    /// disabled and the school unselected.
    fn initialize(&self, state: &mut CascadeState, initial: InitialValues) -> Transition {
        let mut effects = vec![FormEffect::SetInfoPanelVisible { visible: false }];

        state.pending_restore = PendingRestore {
            district: initial.district.clone(),
            school: initial.school.clone(),
            school_name: initial.school_name.clone(),
        };

        if initial.school.as_ref().is_some_and(SchoolId::is_no_school) {
            state.pending_restore = PendingRestore::default();
            effects.push(FormEffect::SetChecked {
                flag: OverrideFlag::NoSchool,
                checked: true,
            });
            return Transition {
                effects,
                next: Some(CascadeEvent::NoSchoolToggled { checked: true }),
                ..Transition::default()
            };
        }

        effects.push(FormEffect::SetGradeLock {
            lock: GradeLock::Standard,
        });

        let saved_not_found = initial.school.as_ref().is_some_and(SchoolId::is_not_found);
        if saved_not_found {
            // The sentinel is re-established through the flag, not through a
            // literal value restore.
            state.pending_restore.school_name = None;
        }

        if let Some(county) = initial.county {
            state.county = Some(county.clone());
            return Transition {
                effects,
                next: Some(CascadeEvent::CountyChanged {
                    county: Some(county),
                }),
                ..Transition::default()
            };
        }

        if saved_not_found {
            state.pending_restore = PendingRestore::default();
            effects.push(FormEffect::SetChecked {
                flag: OverrideFlag::NotFound,
                checked: true,
            });
            return Transition {
                effects,
                next: Some(CascadeEvent::NotFoundToggled { checked: true }),
                ..Transition::default()
            };
        }

        effects.extend([
            FormEffect::SetEnabled {
                control: FormControl::District,
                enabled: false,
            },
            FormEffect::SetEnabled {
                control: FormControl::SchoolName,
                enabled: false,
            },
            FormEffect::SetEnabled {
                control: FormControl::NotFoundBox,
                enabled: false,
            },
        ]);
        Transition::effects(effects)
    }

    /// Invalidates the dependent levels and issues a district lookup.
    fn county_changed(&self, state: &mut CascadeState, county: Option<CountyId>) -> Transition {
        state.county = county.clone();
        state.district = None;
        // Outstanding school responses for the previous county must not
        // land either.
        state.bump_school_generation();

        let mut effects = vec![FormEffect::ClearDistrictOptions];

        let Some(county) = county else {
            state.bump_district_generation();
            effects.push(FormEffect::SetEnabled {
                control: FormControl::District,
                enabled: false,
            });
            return Transition {
                effects,
                next: Some(CascadeEvent::DistrictChanged { district: None }),
                ..Transition::default()
            };
        };

        let generation = state.bump_district_generation();
        tracing::debug!(county = %county, generation, "district lookup issued");
        Transition {
            effects,
            lookup: Some(LookupRequest::Districts { county, generation }),
            ..Transition::default()
        }
    }

    /// Applies a district lookup completion.
    ///
    /// The abroad county forces its fixed district and wins over a pending
    /// district restore; otherwise the restore, if any, is consumed here,
    /// exactly once, against the freshly repopulated list.
    fn districts_loaded(
        &self,
        state: &mut CascadeState,
        county: CountyId,
        generation: u64,
        options: Vec<LocationOption>,
    ) -> Transition {
        if !state.is_current_district_generation(generation) {
            tracing::debug!(county = %county, generation, "stale district response dropped");
            return Transition::default();
        }

        let mut effects = vec![FormEffect::ReplaceDistrictOptions { options }];

        if county == self.ctx.abroad_county {
            state.pending_restore.district = None;
            let district = self.ctx.abroad_district.clone();
            state.district = Some(district.clone());
            effects.extend([
                FormEffect::SetDistrict {
                    value: Some(district.clone()),
                },
                FormEffect::SetEnabled {
                    control: FormControl::District,
                    enabled: false,
                },
            ]);
            return Transition {
                effects,
                next: Some(CascadeEvent::DistrictChanged {
                    district: Some(district),
                }),
                ..Transition::default()
            };
        }

        effects.push(FormEffect::SetEnabled {
            control: FormControl::District,
            enabled: true,
        });

        if let Some(district) = state.pending_restore.district.take() {
            state.district = Some(district.clone());
            effects.push(FormEffect::SetDistrict {
                value: Some(district.clone()),
            });
            return Transition {
                effects,
                next: Some(CascadeEvent::DistrictChanged {
                    district: Some(district),
                }),
                ..Transition::default()
            };
        }

        // Cascade the (empty) selection downstream so the school level
        // clears and disables consistently.
        Transition {
            effects,
            next: Some(CascadeEvent::DistrictChanged {
                district: state.district.clone(),
            }),
            ..Transition::default()
        }
    }

    /// Invalidates the school level and issues a school lookup.
    fn district_changed(
        &self,
        state: &mut CascadeState,
        district: Option<DistrictId>,
    ) -> Transition {
        state.district = district.clone();
        state.school = None;
        state.school_name = None;
        state.schools.clear();

        let leaving_not_found = state.override_mode == OverrideMode::NotFound;
        if leaving_not_found {
            state.override_mode = OverrideMode::Normal;
        }

        let mut effects = vec![
            FormEffect::SetSchool { value: None },
            FormEffect::SetSchoolName { value: None },
            FormEffect::SetChecked {
                flag: OverrideFlag::NotFound,
                checked: false,
            },
            FormEffect::SetInfoPanelVisible { visible: false },
        ];
        if leaving_not_found {
            effects.push(FormEffect::SetEnabled {
                control: FormControl::NoSchoolBox,
                enabled: true,
            });
        }

        let Some(district) = district else {
            state.bump_school_generation();
            effects.extend([
                FormEffect::SetEnabled {
                    control: FormControl::SchoolName,
                    enabled: false,
                },
                FormEffect::SetEnabled {
                    control: FormControl::NotFoundBox,
                    enabled: false,
                },
            ]);
            return Transition::effects(effects);
        };

        let generation = state.bump_school_generation();
        tracing::debug!(district = %district, generation, "school lookup issued");
        Transition {
            effects,
            lookup: Some(LookupRequest::Schools {
                district,
                generation,
            }),
            ..Transition::default()
        }
    }

    /// Applies a school lookup completion and consumes the school restore.
    fn schools_loaded(
        &self,
        state: &mut CascadeState,
        district: DistrictId,
        generation: u64,
        options: Vec<LocationOption>,
    ) -> Transition {
        if !state.is_current_school_generation(generation) {
            tracing::debug!(district = %district, generation, "stale school response dropped");
            return Transition::default();
        }

        state.schools = options;
        let mut effects = vec![
            FormEffect::SetEnabled {
                control: FormControl::SchoolName,
                enabled: true,
            },
            FormEffect::SetEnabled {
                control: FormControl::NotFoundBox,
                enabled: true,
            },
        ];

        if state.pending_restore.school_name.is_some() {
            let school = state.pending_restore.school.take();
            let school_name = state.pending_restore.school_name.take();
            state.school = school.clone();
            state.school_name = school_name.clone();
            effects.extend([
                FormEffect::SetSchool { value: school },
                FormEffect::SetSchoolName { value: school_name },
            ]);
            return Transition::effects(effects);
        }

        if state
            .pending_restore
            .school
            .as_ref()
            .is_some_and(SchoolId::is_not_found)
        {
            state.pending_restore.school = None;
            effects.push(FormEffect::SetChecked {
                flag: OverrideFlag::NotFound,
                checked: true,
            });
            return Transition {
                effects,
                next: Some(CascadeEvent::NotFoundToggled { checked: true }),
                ..Transition::default()
            };
        }

        Transition::effects(effects)
    }

    /// A lookup failed: the option list stays at its pre-request state and
    /// no user-visible error is produced here. Re-selecting the parent
    /// field re-triggers the lookup.
    fn lookup_failed(
        &self,
        state: &mut CascadeState,
        level: CascadeLevel,
        generation: u64,
    ) -> Transition {
        let current = match level {
            CascadeLevel::District => state.is_current_district_generation(generation),
            CascadeLevel::School => state.is_current_school_generation(generation),
        };
        if current {
            tracing::warn!(?level, generation, "lookup failed; keeping pre-request state");
        } else {
            tracing::debug!(?level, generation, "stale lookup failure ignored");
        }
        Transition::default()
    }

    /// Resolves committed free text against the candidate set.
    ///
    /// Only an exact label match binds an identifier; anything else clears
    /// the school selection, leaving the out-of-scope form validation to
    /// refuse submission.
    fn school_name_committed(&self, state: &mut CascadeState, text: String) -> Transition {
        let mut effects = vec![FormEffect::SetInfoPanelVisible { visible: false }];

        match state.autocomplete().exact(&text).cloned() {
            Some(option) => {
                let school = SchoolId::new(option.id);
                state.school = Some(school.clone());
                state.school_name = Some(option.name.clone());
                effects.extend([
                    FormEffect::SetSchool {
                        value: Some(school),
                    },
                    FormEffect::SetSchoolName {
                        value: Some(option.name),
                    },
                ]);
            }
            None => {
                state.school = None;
                state.school_name = None;
                effects.extend([
                    FormEffect::SetSchool { value: None },
                    FormEffect::SetSchoolName { value: None },
                ]);
            }
        }
        Transition::effects(effects)
    }

    /// Commits a picked suggestion: identifier and label together.
    fn school_picked(&self, state: &mut CascadeState, option: LocationOption) -> Transition {
        let school = SchoolId::new(option.id);
        state.school = Some(school.clone());
        state.school_name = Some(option.name.clone());
        Transition::effects(vec![
            FormEffect::SetSchool {
                value: Some(school),
            },
            FormEffect::SetSchoolName {
                value: Some(option.name),
            },
        ])
    }

    fn no_school_toggled(&self, state: &mut CascadeState, checked: bool) -> Transition {
        if checked {
            if state.override_mode == OverrideMode::NotFound {
                // The box is disabled while "not found" is active; ignore a
                // stray event rather than reach an inconsistent state.
                tracing::warn!("'no school' toggle ignored while 'school not found' is active");
                return Transition::default();
            }
            tracing::debug!("entering no-school override");
            state.override_mode = OverrideMode::NoSchool;
            state.pending_restore.discard_school_fields();
            state.county = None;
            state.district = Some(self.ctx.no_school_district.clone());
            state.school = Some(SchoolId::no_school());
            state.school_name = Some(self.ctx.no_school_label.clone());
            state.schools.clear();

            return Transition::effects(vec![
                FormEffect::SetInfoPanelVisible { visible: false },
                FormEffect::SetCounty { value: None },
                FormEffect::SetEnabled {
                    control: FormControl::County,
                    enabled: false,
                },
                FormEffect::SetDistrict {
                    value: Some(self.ctx.no_school_district.clone()),
                },
                FormEffect::SetEnabled {
                    control: FormControl::District,
                    enabled: false,
                },
                FormEffect::SetSchool {
                    value: Some(SchoolId::no_school()),
                },
                FormEffect::SetSchoolName {
                    value: Some(self.ctx.no_school_label.clone()),
                },
                FormEffect::SetEnabled {
                    control: FormControl::SchoolName,
                    enabled: false,
                },
                FormEffect::SetEnabled {
                    control: FormControl::NotFoundBox,
                    enabled: false,
                },
                FormEffect::SetGrade {
                    value: Some(NO_SCHOOL_GRADE),
                },
                FormEffect::SetGradeLock {
                    lock: GradeLock::NoSchoolOnly,
                },
            ]);
        }

        if state.override_mode == OverrideMode::NotFound {
            tracing::warn!("'no school' uncheck ignored while 'school not found' is active");
            return Transition::default();
        }
        tracing::debug!("leaving no-school override");
        state.override_mode = OverrideMode::Normal;
        state.district = None;
        state.school = None;
        state.school_name = None;

        // County comes back selectable; the dependent controls stay
        // disabled until a county is actually chosen. The "not found" box
        // re-enables when a district's schools load.
        Transition::effects(vec![
            FormEffect::SetInfoPanelVisible { visible: false },
            FormEffect::SetEnabled {
                control: FormControl::County,
                enabled: true,
            },
            FormEffect::SetDistrict { value: None },
            FormEffect::SetSchool { value: None },
            FormEffect::SetSchoolName { value: None },
            FormEffect::SetEnabled {
                control: FormControl::SchoolName,
                enabled: false,
            },
            FormEffect::SetGrade { value: None },
            FormEffect::SetGradeLock {
                lock: GradeLock::Standard,
            },
        ])
    }

    fn not_found_toggled(&self, state: &mut CascadeState, checked: bool) -> Transition {
        if checked {
            if state.override_mode == OverrideMode::NoSchool {
                tracing::warn!("'school not found' toggle ignored while 'no school' is active");
                return Transition::default();
            }
            tracing::debug!("entering school-not-found override");
            state.override_mode = OverrideMode::NotFound;
            state.pending_restore.discard_school_fields();
            state.school = Some(SchoolId::not_found());
            state.school_name = Some(self.ctx.not_found_label.clone());

            return Transition::effects(vec![
                FormEffect::SetInfoPanelVisible { visible: true },
                FormEffect::SetSchool {
                    value: Some(SchoolId::not_found()),
                },
                FormEffect::SetSchoolName {
                    value: Some(self.ctx.not_found_label.clone()),
                },
                FormEffect::SetEnabled {
                    control: FormControl::SchoolName,
                    enabled: false,
                },
                FormEffect::SetEnabled {
                    control: FormControl::NoSchoolBox,
                    enabled: false,
                },
            ]);
        }

        if state.override_mode == OverrideMode::NoSchool {
            tracing::warn!("'school not found' uncheck ignored while 'no school' is active");
            return Transition::default();
        }
        tracing::debug!("leaving school-not-found override");
        state.override_mode = OverrideMode::Normal;
        state.school = None;
        state.school_name = None;

        Transition::effects(vec![
            FormEffect::SetInfoPanelVisible { visible: false },
            FormEffect::SetSchool { value: None },
            FormEffect::SetSchoolName { value: None },
            FormEffect::SetEnabled {
                control: FormControl::SchoolName,
                enabled: true,
            },
            FormEffect::SetEnabled {
                control: FormControl::NoSchoolBox,
                enabled: true,
            },
        ])
    }
}
