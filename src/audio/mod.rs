pub mod wav_utils;
