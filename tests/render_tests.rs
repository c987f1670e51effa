//! Map rendering and the textual itinerary over optimized results.

mod fixtures;

use serde_json::json;

use trip_planner::days::DaySelection;
use trip_planner::itinerary::FormVariant;
use trip_planner::place::PoiType;
use trip_planner::render::{EMPTY_SELECTION_MESSAGE, MapView, PALETTE, RenderOptions, day_color};
use trip_planner::session::Session;

use fixtures::{BUSAN_STATION, LODGING, MockOptimizer, RESTAURANTS, SEOUL_STATION, spot};

/// Three-day trip: Seoul, Gyeongju, Busan.
fn planned_session(reply: serde_json::Value) -> Session {
    let mut session = Session::new(FormVariant::BASIC, RenderOptions::default());
    let config = session.config_mut();
    config.set_start(Some(SEOUL_STATION.place()));
    config.set_end(Some(BUSAN_STATION.place()));
    for name in ["Gyeongbokgung", "Bulguksa", "Cheomseongdae", "Haeundae Beach"] {
        config.add_point_of_interest(spot(name).place(), PoiType::Spot);
    }
    config.add_point_of_interest(RESTAURANTS[2].place(), PoiType::Restaurant);
    for (day, hotel) in LODGING.iter().enumerate() {
        config.set_lodging(day, Some(hotel.place())).unwrap();
    }

    session.submit(&MockOptimizer::replying(reply)).unwrap();
    session
}

fn three_day_reply() -> serde_json::Value {
    json!({
        "days": [
            {"date": "Day1", "route": [
                {"name": "Seoul Station"}, {"name": "Gyeongbokgung"}, {"name": "Lotte Hotel Seoul"}
            ]},
            {"date": "Day2", "route": [
                {"name": "Bulguksa"}, {"name": "Seokguram Grotto"},
                {"name": "Cheomseongdae"}, {"name": "Hilton Gyeongju"}
            ]},
            {"date": "Day3", "route": [
                {"name": "Haeundae Beach"}, {"name": "Jagalchi Market"}, {"name": "Busan Station"}
            ]}
        ],
        "unplaced_suggestions": [
            {
                "name": "Gamcheon Culture Village",
                "type": "spot",
                "suggestions": ["Taejongdae", "Oryukdo"]
            }
        ]
    })
}

#[test]
fn all_days_draw_one_path_per_day() {
    let session = planned_session(three_day_reply());
    let view = session.render_map();
    let scene = view.scene().expect("scene with stops");

    assert_eq!(scene.paths.len(), 3);
    let colors: Vec<&str> = scene.paths.iter().map(|path| path.color).collect();
    assert_eq!(colors, vec![PALETTE[0], PALETTE[1], PALETTE[2]]);
    assert!(scene.paths.iter().all(|path| path.distance_km > 0.0));
    assert_eq!(scene.markers.len(), 9);
}

#[test]
fn unknown_stop_is_not_drawn_but_is_listed() {
    let session = planned_session(three_day_reply());
    let scene = session.render_map().scene().cloned().unwrap();

    assert!(scene.markers.iter().all(|marker| marker.name != "Seokguram Grotto"));
    let day2: Vec<_> = scene.markers.iter().filter(|m| m.day == "Day2").collect();
    let numbers: Vec<usize> = day2.iter().map(|m| m.stop_number).collect();
    assert_eq!(numbers, vec![1, 3, 4], "stop numbers follow the route, gaps included");
    assert_eq!(day2[1].tooltip, "Day2 · stop 3");

    let listing = session.itinerary_listing();
    assert_eq!(listing[1].stops[1], "Seokguram Grotto");
}

#[test]
fn listing_labels_roles() {
    let session = planned_session(three_day_reply());
    let listing = session.itinerary_listing();

    assert_eq!(
        listing[0].stops,
        vec!["Seoul Station (start)", "Gyeongbokgung", "Lotte Hotel Seoul (lodging)"]
    );
    assert_eq!(listing[1].stops[3], "Hilton Gyeongju (lodging)");
    assert_eq!(
        listing[2].stops,
        vec!["Haeundae Beach", "Jagalchi Market (restaurant)", "Busan Station (end)"]
    );
}

#[test]
fn selecting_a_day_filters_map_and_listing() {
    let mut session = planned_session(three_day_reply());

    session.select_day(DaySelection::day("Day3"));
    let view = session.render_map();
    let scene = view.scene().unwrap();
    assert_eq!(scene.paths.len(), 1);
    assert_eq!(scene.paths[0].day, "Day3");
    assert_eq!(scene.paths[0].color, day_color(2), "color follows the full itinerary index");
    assert!(scene.markers.iter().all(|marker| marker.day == "Day3"));

    let listing = session.itinerary_listing();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].day, "Day3");

    session.select_day(DaySelection::All);
    assert_eq!(session.render_map().scene().unwrap().paths.len(), 3);
    assert_eq!(session.itinerary_listing().len(), 3);
}

#[test]
fn viewport_contains_every_marker() {
    let mut session = planned_session(three_day_reply());

    for selection in [DaySelection::All, DaySelection::day("Day1"), DaySelection::day("Day2")] {
        session.select_day(selection);
        let view = session.render_map();
        let scene = view.scene().unwrap();
        for marker in &scene.markers {
            assert!(scene.viewport.bounds.contains(marker.position));
        }
        assert!(scene.viewport.bounds.contains(scene.viewport.center));
    }

    session.select_day(DaySelection::day("Day1"));
    let city_zoom = session.render_map().scene().unwrap().viewport.zoom;
    session.select_day(DaySelection::All);
    let trip_zoom = session.render_map().scene().unwrap().viewport.zoom;
    assert!(city_zoom > trip_zoom);
}

#[test]
fn day_with_nothing_resolvable_shows_placeholder() {
    let reply = json!({
        "days": [
            {"date": "Day1", "route": [{"name": "Seoul Station"}, {"name": "Gyeongbokgung"}]},
            {"date": "Day2", "route": []},
            {"date": "Day3", "route": [{"name": "Somewhere Unlisted"}]}
        ]
    });
    let mut session = planned_session(reply);

    session.select_day(DaySelection::day("Day2"));
    assert_eq!(
        session.render_map(),
        MapView::Empty {
            message: EMPTY_SELECTION_MESSAGE
        }
    );

    session.select_day(DaySelection::day("Day3"));
    assert!(session.render_map().is_empty());
    assert_eq!(session.itinerary_listing()[0].stops, vec!["Somewhere Unlisted"]);
}

#[test]
fn single_stop_day_has_marker_but_no_path() {
    let reply = json!({
        "days": [{"date": "Day1", "route": [{"name": "Lotte Hotel Seoul"}]}]
    });
    let session = planned_session(reply);
    let view = session.render_map();
    let scene = view.scene().unwrap();

    assert!(scene.paths.is_empty());
    assert_eq!(scene.markers.len(), 1);
    assert_eq!(scene.viewport.zoom, RenderOptions::default().max_zoom);
}

#[test]
fn place_added_after_submission_is_drawn_on_next_render() {
    let reply = json!({
        "days": [{"date": "Day1", "route": [{"name": "Seoul Station"}, {"name": "N Seoul Tower"}]}]
    });
    let mut session = planned_session(reply);
    assert_eq!(session.render_map().scene().unwrap().markers.len(), 1);

    session
        .config_mut()
        .add_point_of_interest(spot("N Seoul Tower").place(), PoiType::Spot);
    assert_eq!(session.render_map().scene().unwrap().markers.len(), 2);
}

#[test]
fn unplaced_suggestions_are_exposed() {
    let session = planned_session(three_day_reply());
    let unplaced = session.unplaced_suggestions();
    assert_eq!(unplaced.len(), 1);
    assert_eq!(unplaced[0].suggestions, vec!["Taejongdae", "Oryukdo"]);
}

#[test]
fn geojson_export_has_lines_and_points() {
    let session = planned_session(three_day_reply());
    let geojson = session.render_map().scene().unwrap().to_geojson();

    assert_eq!(geojson["type"], "FeatureCollection");
    let features = geojson["features"].as_array().unwrap();
    let lines = features
        .iter()
        .filter(|f| f["geometry"]["type"] == "LineString")
        .count();
    let points = features.iter().filter(|f| f["geometry"]["type"] == "Point").count();
    assert_eq!(lines, 3);
    assert_eq!(points, 9);

    let first_point = features.iter().find(|f| f["geometry"]["type"] == "Point").unwrap();
    assert_eq!(first_point["geometry"]["coordinates"][0], SEOUL_STATION.lng);
    assert_eq!(first_point["properties"]["stop"], 1);
}
