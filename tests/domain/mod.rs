mod sentiment_result_test;
