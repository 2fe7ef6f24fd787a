use crate::core::{MIC_BUFFER_SIZE, MIC_CHANNELS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum MicError {
    #[error("microphone capture is not supported here")]
    Unsupported,
    #[error("microphone permission denied: {0}")]
    PermissionDenied(String),
    #[error("audio graph error: {0}")]
    Graph(String),
}

fn graph_err(label: &str, e: JsValue) -> MicError {
    MicError::Graph(format!("{}: {:?}", label, e))
}

/// A live microphone capture feeding byte frequency frames to a callback.
///
/// `close` releases the device; `Drop` does the same for sessions the page
/// discards without closing.
pub struct MicSession {
    stream: web::MediaStream,
    audio_ctx: web::AudioContext,
    source: web::MediaStreamAudioSourceNode,
    analyser: web::AnalyserNode,
    processor: web::ScriptProcessorNode,
    _on_process: Closure<dyn FnMut(web::AudioProcessingEvent)>,
    closed: bool,
}

impl MicSession {
    pub async fn open(on_frame: impl FnMut(&[u8]) + 'static) -> Result<Self, MicError> {
        let window = web::window().ok_or(MicError::Unsupported)?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|_| MicError::Unsupported)?;
        let constraints = web::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| MicError::PermissionDenied(format!("{:?}", e)))?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(|e| MicError::PermissionDenied(format!("{:?}", e)))?
            .dyn_into()
            .map_err(|e| graph_err("stream", e))?;

        match Self::build_graph(&stream, on_frame) {
            Ok(session) => Ok(session),
            Err(e) => {
                stop_tracks(&stream);
                Err(e)
            }
        }
    }

    fn build_graph(
        stream: &web::MediaStream,
        mut on_frame: impl FnMut(&[u8]) + 'static,
    ) -> Result<Self, MicError> {
        let audio_ctx = web::AudioContext::new().map_err(|e| graph_err("AudioContext", e))?;
        let analyser = audio_ctx
            .create_analyser()
            .map_err(|e| graph_err("AnalyserNode", e))?;
        let source = audio_ctx
            .create_media_stream_source(stream)
            .map_err(|e| graph_err("MediaStreamSource", e))?;
        #[allow(deprecated)]
        let processor = audio_ctx
            .create_script_processor_with_buffer_size_and_number_of_input_channels_and_number_of_output_channels(
                MIC_BUFFER_SIZE,
                MIC_CHANNELS,
                MIC_CHANNELS,
            )
            .map_err(|e| graph_err("ScriptProcessorNode", e))?;

        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| graph_err("connect source", e))?;
        analyser
            .connect_with_audio_node(&processor)
            .map_err(|e| graph_err("connect analyser", e))?;
        processor
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(|e| graph_err("connect processor", e))?;

        let frame_analyser = analyser.clone();
        let mut bins = vec![0u8; analyser.frequency_bin_count() as usize];
        let on_process = Closure::wrap(Box::new(move |_ev: web::AudioProcessingEvent| {
            let count = frame_analyser.frequency_bin_count() as usize;
            if bins.len() != count {
                bins.resize(count, 0);
            }
            frame_analyser.get_byte_frequency_data(&mut bins);
            on_frame(&bins);
        }) as Box<dyn FnMut(web::AudioProcessingEvent)>);
        #[allow(deprecated)]
        processor.set_onaudioprocess(Some(on_process.as_ref().unchecked_ref()));

        log::info!(
            "[mic] graph ready, {} bins, block {}",
            analyser.frequency_bin_count(),
            MIC_BUFFER_SIZE
        );
        Ok(Self {
            stream: stream.clone(),
            audio_ctx,
            source,
            analyser,
            processor,
            _on_process: on_process,
            closed: false,
        })
    }

    /// Stop every track, detach the callback and disconnect the graph. Safe
    /// to call from inside the frame callback.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        stop_tracks(&self.stream);
        #[allow(deprecated)]
        self.processor.set_onaudioprocess(None);
        _ = self.processor.disconnect();
        _ = self.analyser.disconnect();
        _ = self.source.disconnect();
        _ = self.audio_ctx.close();
        log::info!("[mic] released");
    }
}

impl Drop for MicSession {
    fn drop(&mut self) {
        self.close();
    }
}

fn stop_tracks(stream: &web::MediaStream) {
    let tracks: js_sys::Array = stream.get_tracks();
    for track in tracks.iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
}
