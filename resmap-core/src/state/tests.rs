use resmap_boundary::Error as ApiError;

use super::*;
use crate::tests::resource;

fn rejected(status: u16, error: Option<&str>) -> Failure {
    Failure::Rejected(ApiError {
        http_status: status,
        error: error.map(ToOwned::to_owned),
        message: None,
    })
}

fn ack(message: &str) -> Acknowledgement {
    Acknowledgement {
        message: Some(message.to_owned()),
        id: None,
    }
}

fn mapped(id: &str, name: &str, lat: f64, lng: f64) -> Resource {
    let mut r = resource(id, name);
    r.latitude = Some(lat);
    r.longitude = Some(lng);
    r
}

fn sample_resources() -> Vec<Resource> {
    let mut park = mapped("1", "Central Park", 13.08, 80.27);
    park.category = Some("Recreation".into());
    let mut clinic = mapped("2", "Health Point", 13.05, 80.25);
    clinic.address = Some("12 Park Ave".into());
    clinic.category = Some("Clinic ".into());
    let mut shelter = resource("3", "Night Shelter");
    shelter.category = Some("Shelter".into());
    vec![park, clinic, shelter]
}

fn loaded_state() -> AppState {
    let mut state = AppState::default();
    assert_eq!(state.update(Msg::Refresh), [Effect::FetchResources]);
    assert!(state.update(Msg::ResourcesLoaded(Ok(sample_resources()))).is_empty());
    state
}

fn count_refreshes(effects: &[Effect]) -> usize {
    effects
        .iter()
        .filter(|e| matches!(e, Effect::FetchResources))
        .count()
}

fn card_ids(state: &AppState) -> Vec<String> {
    match state.list_view() {
        ListView::Cards(cards) => cards.into_iter().map(|c| c.id).collect(),
        _ => vec![],
    }
}

fn alerts(effects: &[Effect]) -> Vec<&str> {
    effects
        .iter()
        .filter_map(|e| match e {
            Effect::Alert(msg) => Some(msg.as_str()),
            _ => None,
        })
        .collect()
}

mod resource_store {
    use super::*;

    #[test]
    fn show_loading_placeholder_before_first_response() {
        let mut state = AppState::default();
        assert_eq!(state.list_view(), ListView::Loading);
        state.update(Msg::Refresh);
        assert!(state.is_refreshing());
        assert_eq!(state.result_count(), None);
    }

    #[test]
    fn render_list_and_markers_from_the_same_data() {
        let state = loaded_state();
        assert!(!state.is_refreshing());
        assert_eq!(card_ids(&state), ["1", "2", "3"]);
        let marker_ids: Vec<_> = state.markers().into_iter().map(|m| m.id).collect();
        assert_eq!(marker_ids, ["1", "2"]);
        assert_eq!(state.result_count(), Some(3));
    }

    #[test]
    fn replace_collection_wholesale() {
        let mut state = loaded_state();
        state.update(Msg::ResourcesLoaded(Ok(vec![resource("9", "Only one")])));
        assert_eq!(card_ids(&state), ["9"]);
        assert!(state.markers().is_empty());
    }

    #[test]
    fn empty_collection_shows_no_results() {
        let mut state = AppState::default();
        state.update(Msg::ResourcesLoaded(Ok(vec![])));
        assert_eq!(state.list_view(), ListView::Empty);
        assert_eq!(state.result_count(), Some(0));
    }

    #[test]
    fn failed_refresh_never_shows_stale_data() {
        let mut state = loaded_state();
        state.update(Msg::Refresh);
        state.update(Msg::ResourcesLoaded(Err(Failure::Transport(
            "connection refused".into(),
        ))));
        assert_eq!(state.list_view(), ListView::Failed);
        assert_eq!(
            state.list_view().placeholder(),
            Some("Failed to load resources")
        );
        assert!(state.markers().is_empty());
        assert!(state.resources().is_empty());
        assert!(!state.is_refreshing());
    }

    #[test]
    fn last_response_wins() {
        let mut state = AppState::default();
        state.update(Msg::Refresh);
        state.update(Msg::Refresh);
        state.update(Msg::ResourcesLoaded(Ok(vec![resource("new", "Newer")])));
        state.update(Msg::ResourcesLoaded(Ok(vec![resource("old", "Older")])));
        assert_eq!(card_ids(&state), ["old"]);
    }

    #[test]
    fn categories_of_the_store() {
        let state = loaded_state();
        assert_eq!(state.categories(), ["Clinic", "Recreation", "Shelter"]);
    }

    #[test]
    fn stay_refreshing_until_the_last_response() {
        let mut state = loaded_state();
        state.update(Msg::Refresh);
        state.update(Msg::Refresh);
        state.update(Msg::ResourcesLoaded(Ok(sample_resources())));
        assert!(state.is_refreshing());
        state.update(Msg::ResourcesLoaded(Err(Failure::Transport("offline".into()))));
        assert!(!state.is_refreshing());
        // unsolicited responses never underflow
        state.update(Msg::ResourcesLoaded(Ok(sample_resources())));
        assert!(!state.is_refreshing());
        state.update(Msg::Refresh);
        assert!(state.is_refreshing());
    }

    #[test]
    fn drop_selected_category_that_no_longer_exists() {
        let mut state = loaded_state();
        state.update(Msg::CategorySelected("Shelter".into()));
        assert_eq!(card_ids(&state), ["3"]);

        let remaining: Vec<_> = sample_resources()
            .into_iter()
            .filter(|r| r.id != "3")
            .collect();
        state.update(Msg::ResourcesLoaded(Ok(remaining)));
        assert_eq!(state.filter().category, "");
        assert_eq!(card_ids(&state), ["1", "2"]);
    }

    #[test]
    fn keep_selected_category_that_still_exists() {
        let mut state = loaded_state();
        state.update(Msg::CategorySelected("clinic".into()));
        state.update(Msg::ResourcesLoaded(Ok(sample_resources())));
        assert_eq!(state.filter().category, "clinic");
        assert_eq!(card_ids(&state), ["2"]);
    }
}

mod filtering {
    use super::*;

    fn scheduled_ticket(effects: &[Effect]) -> Ticket {
        match effects {
            [Effect::ScheduleSearch { ticket, delay_ms }] => {
                assert_eq!(*delay_ms, 300);
                *ticket
            }
            _ => panic!("expected a scheduled search, got {effects:?}"),
        }
    }

    #[test]
    fn typed_query_is_applied_after_the_quiet_period() {
        let mut state = loaded_state();
        let ticket = scheduled_ticket(&state.update(Msg::SearchInput("park".into())));
        assert_eq!(card_ids(&state), ["1", "2", "3"]);
        assert_eq!(state.search_input(), "park");

        state.update(Msg::SearchSettled(ticket));
        assert_eq!(card_ids(&state), ["1", "2"]);
        assert_eq!(state.markers().len(), 2);
    }

    #[test]
    fn rapid_keystrokes_are_coalesced() {
        let mut state = loaded_state();
        let first = scheduled_ticket(&state.update(Msg::SearchInput("p".into())));
        let second = scheduled_ticket(&state.update(Msg::SearchInput("pa".into())));
        let third = scheduled_ticket(&state.update(Msg::SearchInput("night".into())));

        state.update(Msg::SearchSettled(first));
        state.update(Msg::SearchSettled(second));
        assert_eq!(state.filter().query, "");

        state.update(Msg::SearchSettled(third));
        assert_eq!(state.filter().query, "night");
        assert_eq!(card_ids(&state), ["3"]);
    }

    #[test]
    fn search_button_applies_immediately() {
        let mut state = loaded_state();
        let ticket = scheduled_ticket(&state.update(Msg::SearchInput("health".into())));
        state.update(Msg::SearchSubmitted);
        assert_eq!(card_ids(&state), ["2"]);
        // the pending timer must not apply anything afterwards
        state.update(Msg::SearchInput("park".into()));
        state.update(Msg::SearchSettled(ticket));
        assert_eq!(state.filter().query, "health");
    }

    #[test]
    fn category_and_query_are_combined() {
        let mut state = loaded_state();
        state.update(Msg::CategorySelected("clinic".into()));
        assert_eq!(card_ids(&state), ["2"]);
        state.update(Msg::SearchInput("central".into()));
        state.update(Msg::SearchSubmitted);
        assert_eq!(state.list_view(), ListView::Empty);
        assert_eq!(state.result_count(), Some(0));
    }

    #[test]
    fn clear_filters() {
        let mut state = loaded_state();
        let ticket = scheduled_ticket(&state.update(Msg::SearchInput("park".into())));
        state.update(Msg::CategorySelected("shelter".into()));
        state.update(Msg::ClearFilters);
        state.update(Msg::SearchSettled(ticket));
        assert_eq!(state.search_input(), "");
        assert!(state.filter().is_empty());
        assert_eq!(card_ids(&state), ["1", "2", "3"]);
    }

    #[test]
    fn filtering_does_not_fetch() {
        let mut state = loaded_state();
        let mut effects = state.update(Msg::CategorySelected("clinic".into()));
        effects.extend(state.update(Msg::SearchSubmitted));
        effects.extend(state.update(Msg::ClearFilters));
        assert_eq!(count_refreshes(&effects), 0);
    }
}

mod map {
    use super::*;

    #[test]
    fn click_offers_to_add_a_resource() {
        let mut state = loaded_state();
        let point = MapPoint::new(13.1, 80.2);
        state.update(Msg::MapClicked(point));
        assert_eq!(state.map_popup(), Some(point));
        assert_eq!(state.resource_form().latitude, "");

        state.update(Msg::OpenAddResource(Some(point)));
        assert_eq!(state.dialog(), Some(Dialog::AddResource));
        assert_eq!(state.map_popup(), None);
        assert_eq!(state.resource_form().latitude, "13.100000");
        assert_eq!(state.resource_form().longitude, "80.200000");
    }

    #[test]
    fn click_fills_the_open_add_dialog() {
        let mut state = loaded_state();
        state.update(Msg::OpenAddResource(None));
        state.update(Msg::MapClicked(MapPoint::new(12.987_654_321, 80.5)));
        assert_eq!(state.map_popup(), None);
        assert_eq!(state.resource_form().latitude, "12.987654");
        assert_eq!(state.resource_form().longitude, "80.500000");
        assert!(state.dialog().is_some_and(Dialog::keeps_map_interactive));
    }

    #[test]
    fn only_the_add_dialog_leaves_the_map_clickable() {
        assert!(Dialog::AddResource.keeps_map_interactive());
        assert!(!Dialog::Reviews.keeps_map_interactive());
        assert!(!Dialog::Events.keeps_map_interactive());
    }

    #[test]
    fn card_click_centers_the_map() {
        let mut state = loaded_state();
        assert_eq!(
            state.update(Msg::CardClicked("2".into())),
            [Effect::CenterMap(Viewport {
                center: MapPoint::new(13.05, 80.25),
                zoom: 15.0,
            })]
        );
        assert!(state.update(Msg::CardClicked("3".into())).is_empty());
        assert!(state.update(Msg::CardClicked("unknown".into())).is_empty());
    }

    #[test]
    fn locate_user() {
        let mut state = AppState::default();
        assert_eq!(state.update(Msg::Locate), [Effect::LocateUser]);
        let here = MapPoint::new(1.0, 2.0);
        assert_eq!(
            state.update(Msg::Located(Ok(here))),
            [Effect::CenterMap(Viewport {
                center: here,
                zoom: 14.0
            })]
        );
        let effects = state.update(Msg::Located(Err(LocateError::Unsupported)));
        assert_eq!(alerts(&effects), ["Geolocation not supported"]);
        let effects = state.update(Msg::Located(Err(LocateError::Failed("denied".into()))));
        assert_eq!(alerts(&effects), ["Failed to get location"]);
    }
}

mod add_resource {
    use super::*;

    fn fill(state: &mut AppState) {
        state.update(Msg::OpenAddResource(None));
        state.update(Msg::EditResource(ResourceField::Name, "Food Bank".into()));
        state.update(Msg::EditResource(ResourceField::Category, "Food".into()));
        state.update(Msg::EditResource(ResourceField::Latitude, "13.0".into()));
        state.update(Msg::EditResource(ResourceField::Longitude, "80.0".into()));
    }

    #[test]
    fn missing_latitude_is_rejected_before_sending() {
        let mut state = loaded_state();
        fill(&mut state);
        state.update(Msg::EditResource(ResourceField::Latitude, String::new()));
        let effects = state.update(Msg::SubmitResource);
        assert_eq!(
            effects,
            [Effect::Alert(
                "Please enter name, latitude and longitude".into()
            )]
        );
        assert_eq!(state.dialog(), Some(Dialog::AddResource));
    }

    #[test]
    fn submit_and_refresh_once() {
        let mut state = loaded_state();
        fill(&mut state);
        let effects = state.update(Msg::SubmitResource);
        let [Effect::CreateResource(new)] = effects.as_slice() else {
            panic!("expected a create request, got {effects:?}");
        };
        assert_eq!(new.name, "Food Bank");
        assert_eq!(new.latitude, 13.0);

        let effects = state.update(Msg::ResourceCreated(Ok(ack("Resource added"))));
        assert_eq!(effects, [Effect::FetchResources]);
        assert_eq!(state.dialog(), None);
        assert_eq!(state.resource_form(), &ResourceForm::default());
    }

    #[test]
    fn backend_message_is_shown_on_failure() {
        let mut state = loaded_state();
        fill(&mut state);
        let effects = state.update(Msg::ResourceCreated(Err(rejected(400, Some("Invalid data")))));
        assert_eq!(alerts(&effects), ["Invalid data"]);
        assert_eq!(count_refreshes(&effects), 0);
        assert_eq!(state.dialog(), Some(Dialog::AddResource));
        assert_eq!(state.resource_form().name, "Food Bank");

        let effects = state.update(Msg::ResourceCreated(Err(rejected(500, None))));
        assert_eq!(alerts(&effects), ["Failed to add resource"]);

        let effects = state.update(Msg::ResourceCreated(Err(Failure::Transport("offline".into()))));
        assert_eq!(alerts(&effects), ["Network error while adding resource"]);
    }
}

mod reviews {
    use super::*;

    fn review(name: &str, rating: f64) -> Review {
        Review {
            id: None,
            resource_id: Some("1".into()),
            user_name: Some(name.into()),
            rating,
            comment: Some("ok".into()),
            created_at: Some(1_700_000_000.0),
        }
    }

    #[test]
    fn open_reviews_of_a_resource() {
        let mut state = loaded_state();
        let effects = state.update(Msg::OpenReviews("1".into()));
        assert_eq!(effects, [Effect::FetchReviews("1".into())]);
        assert_eq!(state.dialog(), Some(Dialog::Reviews));
        assert_eq!(state.review_resource(), Some("1"));
        assert_eq!(state.reviews(), PanelView::Loading);

        state.update(Msg::ReviewsLoaded {
            resource_id: "1".into(),
            result: Ok(vec![review("b", 2.0), review("a", 5.0)]),
        });
        let PanelView::Items(items) = state.reviews() else {
            panic!("expected reviews");
        };
        let authors: Vec<_> = items.iter().map(|r| r.author.as_str()).collect();
        assert_eq!(authors, ["b", "a"]);
    }

    #[test]
    fn empty_and_failed_review_lists() {
        let mut state = loaded_state();
        state.update(Msg::OpenReviews("1".into()));
        state.update(Msg::ReviewsLoaded {
            resource_id: "1".into(),
            result: Ok(vec![]),
        });
        assert_eq!(state.reviews(), PanelView::Empty);

        state.update(Msg::OpenReviews("2".into()));
        state.update(Msg::ReviewsLoaded {
            resource_id: "2".into(),
            result: Err(Failure::Transport("offline".into())),
        });
        assert_eq!(state.reviews(), PanelView::Failed);
    }

    #[test]
    fn discard_reviews_of_a_previously_opened_resource() {
        let mut state = loaded_state();
        state.update(Msg::OpenReviews("1".into()));
        state.update(Msg::OpenReviews("2".into()));
        state.update(Msg::ReviewsLoaded {
            resource_id: "1".into(),
            result: Ok(vec![review("stale", 1.0)]),
        });
        assert_eq!(state.reviews(), PanelView::Loading);
        assert_eq!(state.review_resource(), Some("2"));
    }

    #[test]
    fn pointer_is_reset_when_the_dialog_closes() {
        let mut state = loaded_state();
        state.update(Msg::OpenReviews("1".into()));
        state.update(Msg::CloseDialog);
        assert_eq!(state.review_resource(), None);
        assert_eq!(state.dialog(), None);

        let effects = state.update(Msg::SubmitReview);
        assert_eq!(
            alerts(&effects),
            ["Please open the reviews of a resource first"]
        );
    }

    #[test]
    fn opening_events_resets_the_review_pointer() {
        let mut state = loaded_state();
        state.update(Msg::OpenReviews("1".into()));
        state.update(Msg::OpenEvents("2".into()));
        assert_eq!(state.review_resource(), None);
        assert_eq!(state.event_resource(), Some("2"));
        assert_eq!(state.dialog(), Some(Dialog::Events));
    }

    #[test]
    fn submit_review_and_refresh_once() {
        let mut state = loaded_state();
        state.update(Msg::OpenReviews("1".into()));
        state.update(Msg::EditReview(ReviewField::Rating, "4".into()));
        state.update(Msg::EditReview(ReviewField::UserName, "Asha".into()));
        let effects = state.update(Msg::SubmitReview);
        assert_eq!(
            effects,
            [Effect::CreateReview {
                resource_id: "1".into(),
                review: NewReview {
                    rating: 4.0,
                    comment: None,
                    user_name: Some("Asha".into()),
                },
            }]
        );
        let effects = state.update(Msg::ReviewCreated(Ok(ack("Review added"))));
        assert_eq!(effects, [Effect::FetchResources]);
        assert_eq!(state.dialog(), None);
        assert_eq!(state.review_resource(), None);
    }

    #[test]
    fn review_failure_is_surfaced() {
        let mut state = loaded_state();
        state.update(Msg::OpenReviews("1".into()));
        let effects = state.update(Msg::ReviewCreated(Err(rejected(400, Some("Invalid data")))));
        assert_eq!(alerts(&effects), ["Invalid data"]);
        assert_eq!(state.dialog(), Some(Dialog::Reviews));
    }
}

mod events {
    use super::*;

    fn event(title: &str, date: &str) -> Event {
        Event {
            id: None,
            resource_id: Some("1".into()),
            title: title.into(),
            date: date.into(),
            time: None,
            description: None,
            created_at: None,
        }
    }

    #[test]
    fn events_are_sorted_by_date() {
        let mut state = loaded_state();
        assert_eq!(
            state.update(Msg::OpenEvents("1".into())),
            [Effect::FetchEvents("1".into())]
        );
        assert_eq!(state.events(), PanelView::Loading);
        state.update(Msg::EventsLoaded {
            resource_id: "1".into(),
            result: Ok(vec![event("Fair", "2024-03-01"), event("Drive", "2024-01-15")]),
        });
        let PanelView::Items(items) = state.events() else {
            panic!("expected events");
        };
        let dates: Vec<_> = items.iter().map(|e| e.date.as_str()).collect();
        assert_eq!(dates, ["2024-01-15", "2024-03-01"]);
    }

    #[test]
    fn submit_event_reloads_events_and_resources() {
        let mut state = loaded_state();
        state.update(Msg::OpenEvents("1".into()));
        state.update(Msg::EditEvent(EventField::Title, "Health camp".into()));
        state.update(Msg::EditEvent(EventField::Date, "2024-05-01".into()));
        state.update(Msg::EditEvent(EventField::Time, "10:00".into()));
        let effects = state.update(Msg::SubmitEvent);
        assert_eq!(
            effects,
            [Effect::CreateEvent {
                resource_id: "1".into(),
                event: NewEvent {
                    title: "Health camp".into(),
                    date: "2024-05-01".into(),
                    time: Some("10:00".into()),
                    description: None,
                },
            }]
        );
        let effects = state.update(Msg::EventCreated {
            resource_id: "1".into(),
            result: Ok(ack("Event added")),
        });
        assert_eq!(
            effects,
            [Effect::FetchEvents("1".into()), Effect::FetchResources]
        );
        assert_eq!(state.dialog(), Some(Dialog::Events));
        assert_eq!(state.event_form(), &EventForm::default());
    }

    #[test]
    fn event_requires_title_and_date() {
        let mut state = loaded_state();
        state.update(Msg::OpenEvents("1".into()));
        let effects = state.update(Msg::SubmitEvent);
        assert_eq!(alerts(&effects), ["Please enter a title and a date"]);
    }

    #[test]
    fn event_without_open_dialog_is_rejected() {
        let mut state = loaded_state();
        let effects = state.update(Msg::SubmitEvent);
        assert_eq!(alerts(&effects), ["Please open the events of a resource first"]);
    }

    #[test]
    fn upcoming_events() {
        let mut state = AppState::default();
        assert_eq!(
            state.update(Msg::LoadUpcomingEvents),
            [Effect::FetchUpcomingEvents { days: 30 }]
        );
        state.update(Msg::UpcomingEventsLoaded {
            today: "2024-01-01".into(),
            result: Ok(vec![event("B", "2024-02-01"), event("A", "2024-01-01")]),
        });
        let PanelView::Items(items) = state.upcoming_events() else {
            panic!("expected events");
        };
        assert_eq!(items[0].title, "A");
        state.update(Msg::UpcomingEventsLoaded {
            today: "2024-01-01".into(),
            result: Err(rejected(500, None)),
        });
        assert_eq!(state.upcoming_events(), PanelView::Failed);
    }

    #[test]
    fn past_events_are_not_upcoming() {
        let mut state = AppState::default();
        state.update(Msg::UpcomingEventsLoaded {
            today: "2024-03-01".into(),
            result: Ok(vec![
                event("Yesterday", "2024-02-29"),
                event("Today", "2024-03-01"),
                event("Later", "2024-03-20"),
            ]),
        });
        let PanelView::Items(items) = state.upcoming_events() else {
            panic!("expected events");
        };
        let titles: Vec<_> = items.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Today", "Later"]);

        state.update(Msg::UpcomingEventsLoaded {
            today: "2024-04-01".into(),
            result: Ok(vec![event("Over", "2024-03-31")]),
        });
        assert_eq!(state.upcoming_events(), PanelView::Empty);
    }
}

mod admin {
    use super::*;

    fn token(s: &str) -> AdminToken {
        AdminToken::from_prompt(Some(s.into())).unwrap()
    }

    #[test]
    fn verify_with_token() {
        let mut state = loaded_state();
        let effects = state.update(Msg::Verify("1".into()));
        assert!(matches!(
            effects.as_slice(),
            [Effect::PromptAdminToken {
                action: AdminAction::Verify,
                resource_id,
                ..
            }] if resource_id == "1"
        ));
        let effects = state.update(Msg::AdminTokenEntered {
            action: AdminAction::Verify,
            resource_id: "1".into(),
            input: Some("Admin123".into()),
        });
        assert_eq!(
            effects,
            [Effect::VerifyResource {
                resource_id: "1".into(),
                token: token("Admin123"),
            }]
        );
        let effects = state.update(Msg::Verified {
            resource_id: "1".into(),
            result: Ok(ack("Resource verified")),
        });
        assert_eq!(effects, [Effect::FetchResources]);
    }

    #[test]
    fn blank_token_cancels_verification_silently() {
        let mut state = loaded_state();
        for input in [None, Some(String::new()), Some("  ".into())] {
            let effects = state.update(Msg::AdminTokenEntered {
                action: AdminAction::Verify,
                resource_id: "1".into(),
                input,
            });
            assert!(effects.is_empty());
        }
        assert_eq!(card_ids(&state), ["1", "2", "3"]);
    }

    #[test]
    fn verification_failure_defaults_to_unauthorized() {
        let mut state = loaded_state();
        let effects = state.update(Msg::Verified {
            resource_id: "1".into(),
            result: Err(rejected(401, Some("unauthorized"))),
        });
        assert_eq!(alerts(&effects), ["Verification failed: unauthorized"]);
        assert_eq!(count_refreshes(&effects), 0);

        let effects = state.update(Msg::Verified {
            resource_id: "1".into(),
            result: Err(rejected(401, None)),
        });
        assert_eq!(alerts(&effects), ["Verification failed: Unauthorized"]);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut state = loaded_state();
        let effects = state.update(Msg::Delete("2".into()));
        assert_eq!(
            effects,
            [Effect::ConfirmDelete {
                resource_id: "2".into(),
                question: "Delete \"Health Point\"? This cannot be undone.".into(),
            }]
        );
        let effects = state.update(Msg::DeleteConfirmed {
            resource_id: "2".into(),
            confirmed: false,
        });
        assert!(effects.is_empty());
    }

    #[test]
    fn blank_token_cancels_deletion_visibly() {
        let mut state = loaded_state();
        let effects = state.update(Msg::DeleteConfirmed {
            resource_id: "2".into(),
            confirmed: true,
        });
        assert!(matches!(
            effects.as_slice(),
            [Effect::PromptAdminToken {
                action: AdminAction::Delete,
                ..
            }]
        ));
        let effects = state.update(Msg::AdminTokenEntered {
            action: AdminAction::Delete,
            resource_id: "2".into(),
            input: Some(" ".into()),
        });
        assert_eq!(effects, [Effect::Alert("Admin token required".into())]);
        assert_eq!(card_ids(&state), ["1", "2", "3"]);
    }

    #[test]
    fn delete_and_refresh_once() {
        let mut state = loaded_state();
        state.update(Msg::OpenEvents("2".into()));
        let effects = state.update(Msg::AdminTokenEntered {
            action: AdminAction::Delete,
            resource_id: "2".into(),
            input: Some("Admin123".into()),
        });
        assert_eq!(
            effects,
            [Effect::DeleteResource {
                resource_id: "2".into(),
                token: token("Admin123"),
            }]
        );
        let effects = state.update(Msg::Deleted {
            resource_id: "2".into(),
            result: Ok(ack("Deleted")),
        });
        assert_eq!(
            effects,
            [Effect::Alert("Deleted".into()), Effect::FetchResources]
        );
        assert_eq!(state.dialog(), None);
    }

    #[test]
    fn delete_failure_is_surfaced() {
        let mut state = loaded_state();
        let effects = state.update(Msg::Deleted {
            resource_id: "2".into(),
            result: Err(rejected(404, Some("Not found"))),
        });
        assert_eq!(effects, [Effect::Alert("Not found".into())]);
        let effects = state.update(Msg::Deleted {
            resource_id: "2".into(),
            result: Err(Failure::Transport("offline".into())),
        });
        assert_eq!(effects, [Effect::Alert("Failed to delete resource".into())]);
    }
}

#[test]
fn every_successful_mutation_refreshes_exactly_once() {
    let mut state = loaded_state();
    state.update(Msg::OpenEvents("1".into()));
    let results = [
        Msg::ResourceCreated(Ok(ack("Resource added"))),
        Msg::Verified {
            resource_id: "1".into(),
            result: Ok(ack("Resource verified")),
        },
        Msg::Deleted {
            resource_id: "3".into(),
            result: Ok(ack("Deleted")),
        },
        Msg::ReviewCreated(Ok(ack("Review added"))),
        Msg::EventCreated {
            resource_id: "1".into(),
            result: Ok(ack("Event added")),
        },
    ];
    for msg in results {
        let effects = state.update(msg.clone());
        assert_eq!(count_refreshes(&effects), 1, "{msg:?}");
    }
}
