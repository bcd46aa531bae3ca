mod id_strategy_tests;
