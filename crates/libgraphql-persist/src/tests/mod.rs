mod file_reader_tests;
