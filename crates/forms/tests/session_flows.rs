//! End-to-end session tests against the in-process mock backend: the
//! campus entry wizard from first save to submission, then the DO and CO
//! review desks.

mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use serde_json::json;

use onboard_client::{ClientConfig, OnboardClient};
use onboard_core::router::ApplicationRow;
use onboard_core::sections::address::{AddressForm, AddressKind};
use onboard_core::sections::basic_info::{BasicInfoForm, BasicInfoRuleContext};
use onboard_core::sections::salary::SalaryForm;
use onboard_core::sections::ActingUser;
use onboard_core::status::ApplicationStatus;
use onboard_core::steps::WizardStep;
use onboard_forms::{FormsError, ReviewSession, WizardSession};

use common::{spawn_backend, MINTED_TEMP_ID};

const CAMPUS_USER: ActingUser = ActingUser { employee_id: 5109 };
const REVIEWER: ActingUser = ActingUser { employee_id: 7001 };

fn client_for(base: &str) -> OnboardClient {
    OnboardClient::new(ClientConfig::for_base(base)).expect("build client")
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).expect("date")
}

fn rule_ctx() -> BasicInfoRuleContext {
    BasicInfoRuleContext {
        consultant_mode_id: Some(1),
        replacement_join_type_id: Some(3),
    }
}

fn filled_basic_info() -> BasicInfoForm {
    BasicInfoForm {
        mode_of_hiring_id: "2".into(),
        first_name: "Asha".into(),
        last_name: "Rao".into(),
        adhaar_name: "Asha Rao".into(),
        adhaar_no: "123456789012".into(),
        gender_id: "2".into(),
        date_of_birth: "1998-03-14".into(),
        father_name: "Rama Rao".into(),
        primary_mobile_no: "9876543210".into(),
        email: "asha@example.com".into(),
        pancard_num: "ABCDE1234F".into(),
        blood_group_id: "4".into(),
        religion_id: "1".into(),
        category_id: "2".into(),
        marital_status_id: "1".into(),
        qualification_id: "5".into(),
        emergency_ph_no: "9123456780".into(),
        emergency_relation_id: "1".into(),
        ssc_no: "SSC9912".into(),
        campus_id: "12".into(),
        manager_id: "301".into(),
        hired_by_emp_id: "5109".into(),
        emp_work_mode_id: "1".into(),
        join_type_id: "1".into(),
        date_of_join: "2026-01-06".into(),
        ..BasicInfoForm::default()
    }
}

fn pending_row(status: &str) -> ApplicationRow {
    ApplicationRow {
        hr_employee_id: 5109,
        employee_name: "Asha Rao".into(),
        status: status.into(),
        temp_payroll_id: Some(MINTED_TEMP_ID.into()),
        skill_test: false,
    }
}

// ---------------------------------------------------------------------------
// Wizard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_basic_info_save_mints_and_threads_the_temp_id() {
    let (base, state) = spawn_backend().await;
    let mut session = WizardSession::start(client_for(&base), CAMPUS_USER);

    assert!(session.temp_id().is_none());
    let minted = session
        .save_basic_info(&filled_basic_info(), rule_ctx(), today())
        .await
        .expect("first save mints the id");
    assert_eq!(minted.as_str(), MINTED_TEMP_ID);

    // Move to the address step and save it through the session.
    session.advance().expect("to address");
    let mut address = AddressForm::new();
    address.edit(AddressKind::Current, |b| {
        b.name = "Asha Rao".into();
        b.address_line1 = "12-4 Main Road".into();
        b.pin = "522616".into();
        b.city_id = "44".into();
        b.district_id = "7".into();
        b.state_id = "2".into();
        b.country_id = "1".into();
        b.phone_number = "9876543210".into();
    });
    address.set_permanent_same(true);
    let validation = address.validate();
    assert!(validation.is_valid, "{:?}", validation.errors);
    session
        .save_current(&validation, &address.payload(CAMPUS_USER))
        .await
        .expect("save address");

    // The stored upsert is keyed by the minted id.
    let stored = state
        .section(MINTED_TEMP_ID, "address-info")
        .expect("address stored");
    assert_eq!(stored["permanentAddressSameAsCurrent"], json!(true));
    assert_eq!(stored["permanentAddress"]["pin"], json!("522616"));
}

#[tokio::test]
async fn second_basic_info_save_is_a_plain_upsert() {
    let (base, state) = spawn_backend().await;
    let mut session = WizardSession::start(client_for(&base), CAMPUS_USER);

    session
        .save_basic_info(&filled_basic_info(), rule_ctx(), today())
        .await
        .expect("mint");
    let mut corrected = filled_basic_info();
    corrected.email = "asha.rao@example.com".into();
    session
        .save_basic_info(&corrected, rule_ctx(), today())
        .await
        .expect("re-save");

    // Exactly one mint call; the correction went through the tab upsert.
    let requests = state.recorded_requests();
    let mints = requests
        .iter()
        .filter(|r| r.contains("generate-temp-payroll-id"))
        .count();
    assert_eq!(mints, 1);
    let stored = state
        .section(MINTED_TEMP_ID, "basic-info")
        .expect("basic info stored");
    assert_eq!(stored["email"], json!("asha.rao@example.com"));
}

#[tokio::test]
async fn invalid_basic_info_never_reaches_the_backend() {
    let (base, state) = spawn_backend().await;
    let mut session = WizardSession::start(client_for(&base), CAMPUS_USER);

    let mut form = filled_basic_info();
    form.adhaar_no = "1234".into();
    let err = session
        .save_basic_info(&form, rule_ctx(), today())
        .await
        .expect_err("invalid aadhaar");
    assert_matches!(err, FormsError::Invalid(_));
    assert!(state.recorded_requests().is_empty());
    assert!(session.temp_id().is_none());
}

#[tokio::test]
async fn submit_from_the_final_step_reaches_the_do_queue() {
    let (base, state) = spawn_backend().await;
    let mut session = WizardSession::start(client_for(&base), CAMPUS_USER);

    session
        .save_basic_info(&filled_basic_info(), rule_ctx(), today())
        .await
        .expect("mint");
    while session.step() != WizardStep::Documents {
        session.advance().expect("walk to documents");
    }
    session
        .submit(&json!({ "tempPayrollId": MINTED_TEMP_ID }))
        .await
        .expect("submit");

    let body = state.submit_body.lock().unwrap().clone().expect("body");
    assert_eq!(body["tempPayrollId"], json!(MINTED_TEMP_ID));
}

#[tokio::test]
async fn resumed_session_prefills_from_the_saved_record() {
    let (base, _state) = spawn_backend().await;
    let mut entry = WizardSession::start(client_for(&base), CAMPUS_USER);
    entry
        .save_basic_info(&filled_basic_info(), rule_ctx(), today())
        .await
        .expect("mint");
    let temp_id = entry.temp_id().expect("temp id").clone();

    let resumed = WizardSession::resume(client_for(&base), CAMPUS_USER, temp_id);
    let form = resumed.load_basic_info().await.expect("prefill");
    assert_eq!(form.first_name, "Asha");
    assert_eq!(form.temp_payroll_id, MINTED_TEMP_ID);
}

// ---------------------------------------------------------------------------
// DO review
// ---------------------------------------------------------------------------

#[tokio::test]
async fn do_forward_carries_salary_and_checklist_in_one_body() {
    let (base, state) = spawn_backend().await;
    let mut session = ReviewSession::from_row(
        client_for(&base),
        REVIEWER,
        &pending_row("Pending at DO"),
    )
    .expect("DO session");

    let salary = SalaryForm {
        monthly_take_home: "52000".into(),
        yearly_ctc: "700000".into(),
        grade_id: "3".into(),
        emp_structure_id: "2".into(),
        org_id: "1".into(),
        ..SalaryForm::default()
    };
    session.stage_salary(&salary).expect("stage salary");
    session.toggle_checklist(12);
    session.toggle_checklist(3);
    session.forward().await.expect("forward to CO");
    assert_eq!(session.status(), ApplicationStatus::PendingAtCo);

    let body = state.forward_body.lock().unwrap().clone().expect("body");
    assert_eq!(body["tempPayrollId"], json!(MINTED_TEMP_ID));
    assert_eq!(body["checkListIds"], json!("3,12"));
    assert_eq!(body["yearlyCtc"], json!(700000));
    assert_eq!(body["updatedBy"], json!(7001));
}

#[tokio::test]
async fn forward_cannot_be_replayed_after_it_succeeds() {
    let (base, _state) = spawn_backend().await;
    let mut session = ReviewSession::from_row(
        client_for(&base),
        REVIEWER,
        &pending_row("Pending at DO"),
    )
    .expect("DO session");

    session
        .stage_salary(&SalaryForm {
            monthly_take_home: "52000".into(),
            yearly_ctc: "700000".into(),
            grade_id: "3".into(),
            emp_structure_id: "2".into(),
            org_id: "1".into(),
            ..SalaryForm::default()
        })
        .expect("stage salary");
    session.forward().await.expect("first forward");

    let err = session.forward().await.expect_err("second forward");
    assert_matches!(err, FormsError::Core(_));
}

#[tokio::test]
async fn do_send_back_lands_on_the_campus_endpoint() {
    let (base, state) = spawn_backend().await;
    let mut session = ReviewSession::from_row(
        client_for(&base),
        REVIEWER,
        &pending_row("Pending at DO"),
    )
    .expect("DO session");

    session
        .send_back_to_campus("PAN mismatch")
        .await
        .expect("send back");
    assert_eq!(session.status(), ApplicationStatus::Incomplete);

    let bodies = state.reject_bodies.lock().unwrap().clone();
    assert_eq!(bodies.len(), 1);
    assert_eq!(bodies[0]["remarks"], json!("PAN mismatch"));
    assert!(state
        .recorded_requests()
        .iter()
        .any(|r| r.contains("Do%20Controller/back-to-campus")));
}

// ---------------------------------------------------------------------------
// CO review
// ---------------------------------------------------------------------------

#[tokio::test]
async fn co_confirm_records_checklist_and_notice_period() {
    let (base, state) = spawn_backend().await;
    let mut session = ReviewSession::from_row(
        client_for(&base),
        REVIEWER,
        &pending_row("Pending at CO"),
    )
    .expect("CO session");

    session.toggle_checklist(7);
    session.toggle_checklist(3);
    session.set_notice_period("30 days");
    session.confirm().await.expect("confirm");
    assert_eq!(session.status(), ApplicationStatus::Confirmed);

    let body = state.checklist_body.lock().unwrap().clone().expect("body");
    assert_eq!(body["tempPayrollId"], json!(MINTED_TEMP_ID));
    assert_eq!(body["checkListIds"], json!("3,7"));
    assert_eq!(body["noticePeriod"], json!("30 days"));
    assert_eq!(body["updatedBy"], json!(7001));
}

#[tokio::test]
async fn co_reject_returns_the_application_to_the_do() {
    let (base, state) = spawn_backend().await;
    let mut session = ReviewSession::from_row(
        client_for(&base),
        REVIEWER,
        &pending_row("Pending at CO"),
    )
    .expect("CO session");

    session
        .reject_to_do("Bank proof missing")
        .await
        .expect("reject");
    assert_eq!(session.status(), ApplicationStatus::PendingAtDo);

    let bodies = state.reject_bodies.lock().unwrap().clone();
    assert_eq!(bodies[0]["tempPayrollId"], json!(MINTED_TEMP_ID));
    assert_eq!(bodies[0]["remarks"], json!("Bank proof missing"));
    assert!(state
        .recorded_requests()
        .iter()
        .any(|r| r.contains("central-office/reject-back-to-do")));
}

#[tokio::test]
async fn confirmed_session_allows_no_further_moves() {
    let (base, _state) = spawn_backend().await;
    let mut session = ReviewSession::from_row(
        client_for(&base),
        REVIEWER,
        &pending_row("Pending at CO"),
    )
    .expect("CO session");

    session.set_notice_period("15 days");
    session.confirm().await.expect("confirm");

    let err = session.reject_to_do("too late").await.expect_err("terminal");
    assert_matches!(err, FormsError::Core(_));
}
