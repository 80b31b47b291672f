
// This file organizes the integration tests into a cohesive test suite.
// Each module tests a specific aspect of the application:
// - smoke_tests: Basic functionality tests to ensure nothing is broken
// - google_calendar_mock: Calendar client against a mocked transport
// - api_tests: HTTP routes end to end with a mocked calendar provider
