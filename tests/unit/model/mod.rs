mod test_http;
mod test_responses;
