pub mod stage1_features;
pub mod stage2_feature_score;
pub mod stage3_embedding_score;
pub mod stage4_rater_score;
pub mod stage5_fuse;
pub mod stage6_report;
