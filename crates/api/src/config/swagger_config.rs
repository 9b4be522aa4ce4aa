use crate::handlers::{
    attendance::{
        __path_attendance_history, __path_issue_qr_token, __path_mark_attendance,
        __path_mark_staff_attendance, __path_scan_qr,
    },
    auth::{__path_login, __path_register},
    buildings::{__path_create_building, __path_list_buildings},
    complaints::{
        __path_complaint_actions, __path_complaints_by_building, __path_my_complaints,
        __path_raise_complaint, __path_take_complaint_action, __path_update_complaint_status,
    },
    health::__path_health_check,
    laundry::{
        __path_all_laundry_bookings, __path_book_laundry, __path_laundry_by_building,
        __path_laundry_history, __path_update_laundry_status,
    },
    mess::{
        __path_create_menu, __path_create_plan, __path_list_plans, __path_my_subscription,
        __path_subscribe, __path_todays_menus,
    },
    notifications::{__path_broadcast, __path_mark_notification_read, __path_unread_notifications},
    payments::{
        __path_add_cash_payment, __path_confirm_payment, __path_create_order,
        __path_pay_fee_from_wallet, __path_payment_history,
    },
    staff::{
        __path_add_staff, __path_list_staff, __path_staff_attendance_history, __path_staff_profile,
    },
    students::{
        __path_approve_student, __path_current_student, __path_list_students,
        __path_reject_student, __path_select_payment_method, __path_students_by_building,
    },
    visitors::{
        __path_create_visit_request, __path_log_visitor, __path_pending_visitors,
        __path_recent_visitors, __path_update_visitor_status, __path_visitors_by_student,
    },
};
use hostelry_primitives::models::dtos::auth_dto::RegisterRequest;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        register, login, health_check,
        issue_qr_token, mark_attendance, scan_qr, attendance_history, mark_staff_attendance,
        list_students, current_student, approve_student, reject_student, select_payment_method,
        students_by_building,
        add_staff, list_staff, staff_profile, staff_attendance_history,
        list_buildings, create_building,
        subscribe, my_subscription, list_plans, create_plan, todays_menus, create_menu,
        create_order, confirm_payment, add_cash_payment, pay_fee_from_wallet, payment_history,
        unread_notifications, mark_notification_read, broadcast,
        raise_complaint, my_complaints, complaints_by_building, update_complaint_status,
        take_complaint_action, complaint_actions,
        create_visit_request, log_visitor, update_visitor_status, visitors_by_student,
        recent_visitors, pending_visitors,
        book_laundry, update_laundry_status, laundry_history, all_laundry_bookings,
        laundry_by_building
    ),
    components(schemas(RegisterRequest)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Attendance", description = "QR and manual attendance marking"),
        (name = "Students", description = "Registration approval workflow"),
        (name = "Staff", description = "Staff profiles and attendance"),
        (name = "Mess", description = "Meal plans, menus and subscriptions"),
        (name = "Payments", description = "Fee and wallet payments"),
        (name = "Notifications", description = "In-app notifications"),
        (name = "Complaints", description = "Complaint lifecycle"),
        (name = "Visitors", description = "Visitor logging"),
        (name = "Laundry", description = "Laundry bookings")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
