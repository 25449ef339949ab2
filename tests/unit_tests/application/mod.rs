mod drug_normalizer_test;
mod risk_prompt_test;
mod synthesis_service_test;
