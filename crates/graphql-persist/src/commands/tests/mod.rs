mod extract_run_tests;
