mod response_parser_test;
