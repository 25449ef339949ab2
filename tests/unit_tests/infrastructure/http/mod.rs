mod response_test;
