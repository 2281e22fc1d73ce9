use maud::html;

use crate::errors::DashboardError;
use crate::page::{PageContext, View};

const MODEL_INFO: [(&str, &str); 6] = [
    ("Model Type", "MetaConditioned Residual Diffusion Model (MC-RDDM)"),
    ("Inputs", "4–6 past satellite frames (VIS, IR, WV channels)"),
    ("Outputs", "1–2 future cloud motion predictions"),
    ("Conditioning", "Sun angle, time of day, spectral attention"),
    (
        "Key Innovation",
        "Spatio-temporal learning + spectral fusion + efficient latent diffusion",
    ),
    ("Status", "Prototype Phase"),
];

pub fn render(ctx: &mut PageContext<'_>) -> Result<View, DashboardError> {
    let options = ctx.options;
    let mut view = View::new();

    view.push(html! {
        h1 { (options.product_name) }
        h2 { "AI-Powered Cloud Motion Forecasting using Diffusion Models" }
        p {
            "Welcome to " strong { (options.product_name) } ", an innovative project that leverages the power of "
            strong { "MetaConditioned Residual Diffusion Models (MC-RDDM)" } " to predict "
            strong { "short-term cloud motion" } " using "
            strong { "multi-spectral satellite imagery from INSAT-3DR/3DS" } "."
        }
        p {
            "Our vision is to bring " strong { "next-generation AI forecasting" }
            " to nowcasting and severe weather early warning systems."
        }
        hr;
        h2 { "Project Overview" }
        ul {
            li { strong { "What:" } " Short-term (0 to 3 hours) " strong { "cloud motion prediction" } " using deep learning and generative AI." }
            li { strong { "How:" } " By training a " strong { "diffusion-based model" } " on historical satellite imagery sequences and multi-channel spectral data (VIS, IR, WV)." }
            li { strong { "Why:" } " Traditional optical flow and physics-based models often fail under volatile weather; our approach aims to bring " strong { "greater accuracy, realism, and adaptability" } " to weather nowcasting." }
            li { strong { "Impact:" } " Improved " strong { "early warnings for severe weather" } ", real-time visualizations, and " strong { "AI-backed decision support" } " for meteorological agencies." }
        }
        hr;
        h2 { "Model Architecture Highlights" }
        dl {
            @for (key, value) in MODEL_INFO {
                dt { strong { (key) ":" } }
                dd { (value) }
            }
        }
        hr;
        details {
            summary { "How It Works (Click to Expand)" }
            p { "Our " strong { "MC-RDDM" } " learns the complex patterns of " strong { "cloud evolution" } " by:" }
            ol {
                li { "Analyzing " strong { "sequences of past satellite images" } " across multiple spectral channels (visible light, infrared, water vapor)." }
                li { "Applying a " strong { "Residual Diffusion Model" } " to simulate realistic future cloud movement." }
                li { "Conditioning predictions on " strong { "auxiliary metadata" } " such as solar geometry and time of day." }
                li { "(Optionally) Compressing information using " strong { "latent space representations" } " for faster inference." }
            }
            p { "The result is a system that can generate " strong { "future cloud images" } " that look and behave like real atmospheric patterns." }
        }
        hr;
        p { "Built by " (options.team_name) }
    });

    Ok(view)
}
