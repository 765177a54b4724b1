mod extract_tests;
mod html_tests;
