mod fragment_resolver_tests;
