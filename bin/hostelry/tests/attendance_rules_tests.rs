use chrono::NaiveTime;
use hostelry_core::services::attendance_service::{meal_for, next_hostel_action};
use hostelry_primitives::models::entities::enum_types::{HostelAction, MealType};

fn at(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).unwrap()
}

#[test]
fn first_hostel_mark_is_in() {
    assert_eq!(next_hostel_action(None), HostelAction::In);
}

#[test]
fn hostel_marks_alternate_indefinitely() {
    let mut last: Option<HostelAction> = None;

    for i in 0..10 {
        let next = next_hostel_action(last);
        if i % 2 == 0 {
            assert_eq!(next, HostelAction::In);
        } else {
            assert_eq!(next, HostelAction::Out);
        }
        last = Some(next);
    }
}

#[test]
fn out_toggles_back_to_in() {
    assert_eq!(next_hostel_action(Some(HostelAction::Out)), HostelAction::In);
    assert_eq!(next_hostel_action(Some(HostelAction::In)), HostelAction::Out);
}

#[test]
fn meal_windows_map_to_meal_types() {
    assert_eq!(meal_for(at(8, 30, 0)), Some(MealType::Breakfast));
    assert_eq!(meal_for(at(10, 59, 59)), Some(MealType::Breakfast));
    assert_eq!(meal_for(at(13, 0, 0)), Some(MealType::Lunch));
    assert_eq!(meal_for(at(20, 15, 0)), Some(MealType::Dinner));
    assert_eq!(meal_for(at(21, 59, 59)), Some(MealType::Dinner));
}

#[test]
fn outside_every_window_is_closed() {
    assert_eq!(meal_for(at(6, 0, 0)), None);
    assert_eq!(meal_for(at(11, 30, 0)), None);
    assert_eq!(meal_for(at(15, 0, 0)), None);
    assert_eq!(meal_for(at(18, 0, 0)), None);
    assert_eq!(meal_for(at(23, 0, 0)), None);
}

#[test]
fn window_boundaries_are_exclusive() {
    // a scan at exactly the opening or closing instant is rejected
    assert_eq!(meal_for(at(7, 0, 0)), None);
    assert_eq!(meal_for(at(11, 0, 0)), None);
    assert_eq!(meal_for(at(12, 0, 0)), None);
    assert_eq!(meal_for(at(14, 0, 0)), None);
    assert_eq!(meal_for(at(19, 0, 0)), None);
    assert_eq!(meal_for(at(22, 0, 0)), None);

    // one second inside is enough
    assert_eq!(meal_for(at(7, 0, 1)), Some(MealType::Breakfast));
    assert_eq!(meal_for(at(12, 0, 1)), Some(MealType::Lunch));
    assert_eq!(meal_for(at(19, 0, 1)), Some(MealType::Dinner));
}
