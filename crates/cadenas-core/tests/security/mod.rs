mod cost_scaling;
mod salt_entropy;
