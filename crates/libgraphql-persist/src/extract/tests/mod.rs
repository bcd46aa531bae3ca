mod literal_locator_tests;
