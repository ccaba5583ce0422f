mod auth_tests;
mod report_tests;
