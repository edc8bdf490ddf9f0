use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use candle_core::{D, DType, Device, IndexOp, Module, Tensor};
use candle_nn::{Linear, VarBuilder};
use candle_transformers::models::bert::{BertModel, Config as BertConfig};
use candle_transformers::models::distilbert::{Config as DistilBertConfig, DistilBertModel};
use hf_hub::api::sync::Api;
use hf_hub::{Repo, RepoType};
use serde::Deserialize;
use tokenizers::Tokenizer;

use crate::application::ports::{PredictorError, RawPrediction, SentimentPredictor};
use crate::domain::{Backend, Line};

pub const DEFAULT_SENTIMENT_MODEL: &str =
    "distilbert/distilbert-base-uncased-finetuned-sst-2-english";

/// Fields shared by BERT-family `config.json` files that the heads need.
#[derive(Debug, Deserialize)]
struct HeadConfig {
    model_type: Option<String>,
    hidden_size: Option<usize>,
    dim: Option<usize>,
    max_position_embeddings: Option<usize>,
    #[serde(default)]
    id2label: HashMap<String, String>,
}

impl HeadConfig {
    fn labels(&self) -> Vec<String> {
        let count = self.id2label.len().max(2);
        (0..count)
            .map(|i| {
                self.id2label
                    .get(&i.to_string())
                    .cloned()
                    .unwrap_or_else(|| format!("LABEL_{}", i))
            })
            .collect()
    }
}

enum ClassifierHead {
    Bert {
        encoder: BertModel,
        pooler: Linear,
        classifier: Linear,
    },
    DistilBert {
        encoder: DistilBertModel,
        pre_classifier: Linear,
        classifier: Linear,
    },
}

struct ModelFiles {
    config: PathBuf,
    tokenizer: PathBuf,
    weights: PathBuf,
}

/// Pretrained sequence-classification model run locally with candle.
pub struct CandleClassifierPredictor {
    model_id: String,
    head: ClassifierHead,
    tokenizer: Tokenizer,
    labels: Vec<String>,
    device: Device,
}

impl CandleClassifierPredictor {
    /// Loads a BERT or DistilBERT classifier from a local directory or the
    /// Hugging Face Hub.
    pub fn new(model_id: &str) -> Result<Self, PredictorError> {
        let device = Self::select_device();

        tracing::info!(
            device = ?device,
            model = model_id,
            "Initializing sentiment classifier"
        );

        let files = Self::resolve_files(model_id)?;

        let config_contents = std::fs::read_to_string(&files.config)
            .map_err(|e| PredictorError::ModelLoadFailed(format!("read config: {}", e)))?;
        let head_config: HeadConfig = serde_json::from_str(&config_contents)
            .map_err(|e| PredictorError::ModelLoadFailed(format!("parse config: {}", e)))?;

        let mut tokenizer = Tokenizer::from_file(&files.tokenizer)
            .map_err(|e| PredictorError::ModelLoadFailed(format!("tokenizer: {}", e)))?;

        if let Some(max_length) = head_config.max_position_embeddings {
            tokenizer
                .with_truncation(Some(tokenizers::TruncationParams {
                    max_length,
                    ..Default::default()
                }))
                .map_err(|e| {
                    PredictorError::ModelLoadFailed(format!("truncation config: {}", e))
                })?;
        }

        // SAFETY: safetensors files are memory-mapped read-only
        let vb = unsafe {
            VarBuilder::from_mmaped_safetensors(&[files.weights], DType::F32, &device)
                .map_err(|e| PredictorError::ModelLoadFailed(format!("weights: {}", e)))?
        };

        let labels = head_config.labels();
        let head = Self::load_head(&head_config, &config_contents, vb, labels.len())?;

        tracing::info!(labels = ?labels, "Sentiment classifier loaded successfully");

        Ok(Self {
            model_id: model_id.to_string(),
            head,
            tokenizer,
            labels,
            device,
        })
    }

    fn select_device() -> Device {
        Device::new_metal(0).unwrap_or(Device::Cpu)
    }

    fn resolve_files(model_id: &str) -> Result<ModelFiles, PredictorError> {
        let local = Path::new(model_id);
        if local.is_dir() {
            return Ok(ModelFiles {
                config: local.join("config.json"),
                tokenizer: local.join("tokenizer.json"),
                weights: local.join("model.safetensors"),
            });
        }

        let api = Api::new().map_err(|e| PredictorError::ModelLoadFailed(e.to_string()))?;
        let repo = api.repo(Repo::new(model_id.to_string(), RepoType::Model));

        let config = repo
            .get("config.json")
            .map_err(|e| PredictorError::ModelLoadFailed(format!("config.json: {}", e)))?;
        let tokenizer = repo
            .get("tokenizer.json")
            .map_err(|e| PredictorError::ModelLoadFailed(format!("tokenizer.json: {}", e)))?;
        let weights = repo
            .get("model.safetensors")
            .map_err(|e| PredictorError::ModelLoadFailed(format!("model.safetensors: {}", e)))?;

        Ok(ModelFiles {
            config,
            tokenizer,
            weights,
        })
    }

    fn load_head(
        head_config: &HeadConfig,
        config_contents: &str,
        vb: VarBuilder<'static>,
        num_labels: usize,
    ) -> Result<ClassifierHead, PredictorError> {
        let load_err = |what: &str, e: candle_core::Error| {
            PredictorError::ModelLoadFailed(format!("{}: {}", what, e))
        };

        match head_config.model_type.as_deref() {
            Some("bert") => {
                let config: BertConfig = serde_json::from_str(config_contents)
                    .map_err(|e| PredictorError::ModelLoadFailed(format!("bert config: {}", e)))?;
                let hidden = head_config.hidden_size.ok_or_else(|| {
                    PredictorError::ModelLoadFailed("config is missing hidden_size".to_string())
                })?;

                let encoder = BertModel::load(vb.pp("bert"), &config)
                    .map_err(|e| load_err("encoder", e))?;
                let pooler = candle_nn::linear(hidden, hidden, vb.pp("bert.pooler.dense"))
                    .map_err(|e| load_err("pooler", e))?;
                let classifier = candle_nn::linear(hidden, num_labels, vb.pp("classifier"))
                    .map_err(|e| load_err("classifier", e))?;

                Ok(ClassifierHead::Bert {
                    encoder,
                    pooler,
                    classifier,
                })
            }
            Some("distilbert") => {
                let config: DistilBertConfig = serde_json::from_str(config_contents).map_err(
                    |e| PredictorError::ModelLoadFailed(format!("distilbert config: {}", e)),
                )?;
                let dim = head_config.dim.ok_or_else(|| {
                    PredictorError::ModelLoadFailed("config is missing dim".to_string())
                })?;

                let encoder = DistilBertModel::load(vb.pp("distilbert"), &config)
                    .map_err(|e| load_err("encoder", e))?;
                let pre_classifier = candle_nn::linear(dim, dim, vb.pp("pre_classifier"))
                    .map_err(|e| load_err("pre_classifier", e))?;
                let classifier = candle_nn::linear(dim, num_labels, vb.pp("classifier"))
                    .map_err(|e| load_err("classifier", e))?;

                Ok(ClassifierHead::DistilBert {
                    encoder,
                    pre_classifier,
                    classifier,
                })
            }
            other => Err(PredictorError::ModelLoadFailed(format!(
                "unsupported model type: {}",
                other.unwrap_or("<missing>")
            ))),
        }
    }

    fn classify(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, PredictorError> {
        let encodings = self
            .tokenizer
            .encode_batch(texts.to_vec(), true)
            .map_err(|e| PredictorError::InferenceFailed(format!("tokenization: {}", e)))?;

        let max_len = encodings
            .iter()
            .map(|e| e.get_ids().len())
            .max()
            .unwrap_or(0);

        let mut all_input_ids = Vec::with_capacity(texts.len() * max_len);
        let mut all_type_ids = Vec::with_capacity(texts.len() * max_len);
        let mut all_attention_mask = Vec::with_capacity(texts.len() * max_len);

        for encoding in &encodings {
            let ids = encoding.get_ids();
            let pad_len = max_len - ids.len();

            all_input_ids.extend_from_slice(ids);
            all_input_ids.extend(std::iter::repeat_n(0u32, pad_len));

            all_type_ids.extend_from_slice(encoding.get_type_ids());
            all_type_ids.extend(std::iter::repeat_n(0u32, pad_len));

            all_attention_mask.extend_from_slice(encoding.get_attention_mask());
            all_attention_mask.extend(std::iter::repeat_n(0u32, pad_len));
        }

        let batch_size = texts.len();
        let input_ids = Tensor::from_vec(all_input_ids, (batch_size, max_len), &self.device)
            .map_err(inference_failed)?;

        let logits = match &self.head {
            ClassifierHead::Bert {
                encoder,
                pooler,
                classifier,
            } => {
                let token_type_ids =
                    Tensor::from_vec(all_type_ids, (batch_size, max_len), &self.device)
                        .map_err(inference_failed)?;
                let attention_mask =
                    Tensor::from_vec(all_attention_mask, (batch_size, max_len), &self.device)
                        .map_err(inference_failed)?;

                let hidden = encoder
                    .forward(&input_ids, &token_type_ids, Some(&attention_mask))
                    .map_err(inference_failed)?;
                hidden
                    .i((.., 0))
                    .and_then(|cls| pooler.forward(&cls))
                    .and_then(|pooled| pooled.tanh())
                    .and_then(|pooled| classifier.forward(&pooled))
                    .map_err(inference_failed)?
            }
            ClassifierHead::DistilBert {
                encoder,
                pre_classifier,
                classifier,
            } => {
                // DistilBERT masks positions flagged with 1.
                let padding: Vec<u8> = all_attention_mask
                    .iter()
                    .map(|&m| u8::from(m == 0))
                    .collect();
                let padding_mask =
                    Tensor::from_vec(padding, (batch_size, 1, 1, max_len), &self.device)
                        .map_err(inference_failed)?;

                let hidden = encoder
                    .forward(&input_ids, &padding_mask)
                    .map_err(inference_failed)?;
                hidden
                    .i((.., 0))
                    .and_then(|cls| pre_classifier.forward(&cls))
                    .and_then(|pooled| pooled.relu())
                    .and_then(|pooled| classifier.forward(&pooled))
                    .map_err(inference_failed)?
            }
        };

        logits
            .to_dtype(DType::F32)
            .and_then(|logits| candle_nn::ops::softmax(&logits, D::Minus1))
            .and_then(|probabilities| probabilities.to_vec2::<f32>())
            .map_err(inference_failed)
    }

    fn to_prediction(&self, probabilities: &[f32]) -> RawPrediction {
        let (index, score) = probabilities
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, 0.0));

        let label = self
            .labels
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("LABEL_{}", index));

        RawPrediction::new(label, score)
    }
}

fn inference_failed(e: candle_core::Error) -> PredictorError {
    PredictorError::InferenceFailed(e.to_string())
}

#[async_trait]
impl SentimentPredictor for CandleClassifierPredictor {
    fn backend(&self) -> Backend {
        Backend::Transformers
    }

    async fn predict(&self, lines: &[Line]) -> Result<Vec<RawPrediction>, PredictorError> {
        if lines.is_empty() {
            return Ok(Vec::new());
        }

        tracing::debug!(model = %self.model_id, lines = lines.len(), "Classifying lines");

        let texts: Vec<&str> = lines.iter().map(Line::as_str).collect();
        let probabilities = self.classify(&texts)?;

        Ok(probabilities
            .iter()
            .map(|row| self.to_prediction(row))
            .collect())
    }
}
