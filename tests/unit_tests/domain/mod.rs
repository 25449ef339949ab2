mod translation_test;
