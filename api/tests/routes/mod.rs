mod cors_test;
mod health_test;
mod monthly_report_test;
mod resubmit_test;
mod submit_essay_test;
mod upstream_test;
