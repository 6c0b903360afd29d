mod relay_client_tests;
