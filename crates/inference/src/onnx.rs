use {
    crate::{Device, InferError, ModelSource, Session},
    base::Tensor,
    ndarray::{ArrayD, ArrayView, IxDyn},
    ort::{
        inputs,
        session::Session as OrtSession,
        value::TensorRef,
    },
    std::collections::HashMap,
};

/// ONNX Runtime session.
pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl OnnxSession {
    /// Build a session for `model` on `device`.
    pub fn load(model: ModelSource, device: &Device) -> Result<Self, InferError> {
        let builder = OrtSession::builder().map_err(|e| {
            InferError::Runtime(format!("failed to create session builder: {}", e))
        })?;

        // map Device to ort execution providers
        let mut builder = match device {
            Device::Cpu => {
                log::info!("onnx: using CPU execution provider");
                builder
            }
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::ep::ExecutionProvider;
                use ort::execution_providers::CUDAExecutionProvider;
                let ep = CUDAExecutionProvider::default().with_device_id(*device_id);
                log::info!(
                    "onnx: CUDA EP requested (device_id={}), available: {}",
                    device_id,
                    ep.is_available().unwrap_or(false)
                );
                builder
                    .with_execution_providers([ep.build()])
                    .map_err(|_| InferError::UnsupportedDevice(device.clone()))?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::UnsupportedDevice(device.clone()));
            }
        };

        let session = match model {
            ModelSource::File(path) => builder.commit_from_file(&path).map_err(|e| {
                InferError::ModelLoad(format!("failed to load {}: {}", path.display(), e))
            })?,
            ModelSource::Memory(bytes) => builder.commit_from_memory(&bytes).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from memory: {}", e))
            })?,
        };

        let input_names: Vec<String> = session
            .inputs()
            .iter()
            .map(|input| input.name().to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();
        log::debug!("onnx: inputs {:?}, outputs {:?}", input_names, output_names);

        Ok(Self {
            session,
            input_names,
            output_names,
        })
    }
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        // single-input models only
        let [(name, tensor)] = inputs else {
            return Err(InferError::Runtime(format!(
                "expected exactly one input, got {}",
                inputs.len()
            )));
        };
        if !self.input_names.iter().any(|known| known == name) {
            return Err(InferError::Runtime(format!(
                "unknown input '{}', model expects {:?}",
                name, self.input_names
            )));
        }

        let array = tensor_to_ndarray(tensor.clone())?;
        let tensor_ref = TensorRef::from_array_view(array.view())
            .map_err(|e| InferError::Runtime(format!("failed to create tensor ref: {}", e)))?;
        let outputs = self
            .session
            .run(inputs![*name => tensor_ref])
            .map_err(|e| InferError::Runtime(format!("inference failed: {}", e)))?;

        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let array = outputs[output_name.as_str()]
                .try_extract_array::<f32>()
                .map_err(|e| {
                    InferError::Runtime(format!("output '{}' is not f32: {}", output_name, e))
                })?;
            result.insert(output_name.clone(), ndarray_to_tensor(array)?);
        }
        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

pub fn tensor_to_ndarray(tensor: Tensor<f32>) -> Result<ArrayD<f32>, InferError> {
    ArrayD::from_shape_vec(tensor.shape, tensor.data)
        .map_err(|e| InferError::Shape(format!("failed to create ndarray from tensor: {}", e)))
}

pub fn ndarray_to_tensor(
    array: ArrayView<'_, f32, IxDyn>,
) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    let data = array.iter().copied().collect();
    Ok(Tensor::new(shape, data)?)
}
