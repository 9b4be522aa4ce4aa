use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    attendance::{
        attendance_history, issue_qr_token, mark_attendance, mark_staff_attendance, scan_qr,
    },
    auth::{login, register},
    buildings::{create_building, list_buildings},
    complaints::{
        complaint_actions, complaints_by_building, my_complaints, raise_complaint,
        take_complaint_action, update_complaint_status,
    },
    health::health_check,
    laundry::{
        all_laundry_bookings, book_laundry, laundry_by_building, laundry_history,
        update_laundry_status,
    },
    mess::{create_menu, create_plan, list_plans, my_subscription, subscribe, todays_menus},
    notifications::{broadcast, mark_notification_read, unread_notifications},
    payments::{
        add_cash_payment, confirm_payment, create_order, pay_fee_from_wallet, payment_history,
    },
    staff::{add_staff, list_staff, staff_attendance_history, staff_profile},
    students::{
        approve_student, current_student, list_students, reject_student, select_payment_method,
        students_by_building,
    },
    visitors::{
        create_visit_request, log_visitor, pending_visitors, recent_visitors,
        update_visitor_status, visitors_by_student,
    },
};
use axum::routing::{get, post, put};
use axum::{middleware, Router};
use axum_prometheus::metrics_exporter_prometheus::PrometheusHandle;
use axum_prometheus::PrometheusMetricLayer;
use hostelry_core::security::SecurityConfig;
use hostelry_core::AppState;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(
    state: Arc<AppState>,
    metric_layer: PrometheusMetricLayer<'static>,
    metric_handle: PrometheusHandle,
) -> Router {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(10)
            .finish()
            .expect("valid governor configuration"),
    );

    let public_router = create_public_routers(metric_handle);
    let protected_router = create_secured_routers(&state);

    let mut router = Router::new()
        .merge(public_router)
        .merge(protected_router)
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http()),
        )
        .layer(metric_layer);

    // disabled under test to avoid key-extraction failures on local sockets
    if std::env::var("APP_ENV").unwrap_or_default() != "test" {
        router = router.layer(GovernorLayer {
            config: governor_conf,
        });
    }

    router.with_state(state)
}

fn create_secured_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        // attendance
        .route("/api/attendance/qr", get(issue_qr_token))
        .route("/api/attendance/mark", post(mark_attendance))
        .route("/api/attendance/scan", post(scan_qr))
        .route("/api/attendance/history", get(attendance_history))
        .route("/api/attendance/staff", post(mark_staff_attendance))
        // admission workflow
        .route("/api/students", get(list_students))
        .route("/api/students/me", get(current_student))
        .route("/api/students/{student_id}/approve", post(approve_student))
        .route("/api/students/{student_id}/reject", post(reject_student))
        .route("/api/students/payment_method", post(select_payment_method))
        .route(
            "/api/students/building/{building_id}",
            get(students_by_building),
        )
        // staff
        .route("/api/staff", get(list_staff).post(add_staff))
        .route("/api/staff/profile", get(staff_profile))
        .route("/api/staff/attendance", get(staff_attendance_history))
        // buildings
        .route("/api/buildings", get(list_buildings).post(create_building))
        // mess
        .route("/api/mess/subscribe", post(subscribe))
        .route("/api/mess/subscription", get(my_subscription))
        .route("/api/mess/plans", get(list_plans).post(create_plan))
        .route("/api/mess/menus", post(create_menu))
        .route("/api/mess/menus/today", get(todays_menus))
        // payments
        .route("/api/payments/order", post(create_order))
        .route("/api/payments/confirm", post(confirm_payment))
        .route("/api/payments/cash", post(add_cash_payment))
        .route("/api/payments/wallet_fee", post(pay_fee_from_wallet))
        .route("/api/payments/history", get(payment_history))
        // notifications
        .route("/api/notifications/unread", get(unread_notifications))
        .route(
            "/api/notifications/{notification_id}/read",
            post(mark_notification_read),
        )
        .route("/api/notifications/broadcast", post(broadcast))
        // complaints
        .route("/api/complaints", post(raise_complaint))
        .route("/api/complaints/me", get(my_complaints))
        .route(
            "/api/complaints/building/{building_id}",
            get(complaints_by_building),
        )
        .route(
            "/api/complaints/{complaint_id}/status",
            put(update_complaint_status),
        )
        .route("/api/complaints/actions", post(take_complaint_action))
        .route(
            "/api/complaints/{complaint_id}/actions",
            get(complaint_actions),
        )
        // visitors
        .route("/api/visitors/request", post(create_visit_request))
        .route("/api/visitors/log", post(log_visitor))
        .route(
            "/api/visitors/{visitor_id}/status",
            put(update_visitor_status),
        )
        .route("/api/visitors/student/{student_id}", get(visitors_by_student))
        .route("/api/visitors/recent", get(recent_visitors))
        .route("/api/visitors/pending/{building_id}", get(pending_visitors))
        // laundry
        .route("/api/laundry/book", post(book_laundry))
        .route(
            "/api/laundry/{booking_id}/status",
            put(update_laundry_status),
        )
        .route("/api/laundry/history", get(laundry_history))
        .route("/api/laundry/all", get(all_laundry_bookings))
        .route("/api/laundry/building/{building_id}", get(laundry_by_building))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

fn create_public_routers(metric_handle: PrometheusHandle) -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/health", get(health_check))
        .route(
            "/metrics",
            get(move || async move { metric_handle.render() }),
        )
}
