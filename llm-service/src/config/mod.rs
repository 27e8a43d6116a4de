pub mod llm_model_config;
