pub const PAGE: &str = "min-h-screen bg-gradient-to-br from-slate-900 via-blue-900 to-slate-800 relative overflow-hidden";
pub const PAGE_OVERLAY: &str = "absolute inset-0 bg-slate-900/70";
pub const PAGE_CROWD: &str = "absolute inset-0 bg-cover bg-center opacity-30";
pub const PAGE_CONTENT: &str = "relative z-10 flex flex-col items-center justify-center min-h-screen p-4";
pub const CARD: &str = "w-full max-w-xl bg-slate-800/80 backdrop-blur-sm rounded-2xl shadow-2xl border border-slate-700 p-6 md:p-8";
pub const BRAND_BADGE: &str = "w-12 h-12 bg-blue-600 rounded-full flex items-center justify-center mr-4";
pub const BRAND_TITLE: &str = "text-2xl md:text-3xl font-bold text-white leading-tight";
pub const BRAND_SUBTITLE: &str = "text-blue-300 font-semibold";
pub const TEXT_HERO: &str = "text-3xl md:text-4xl font-extrabold text-white mb-2";
pub const TEXT_BODY: &str = "text-white/80 text-lg";
pub const TEXT_LABEL: &str = "block text-sm font-semibold text-white mb-1";
pub const TEXT_ERROR: &str = "text-sm text-red-400 mt-1";
pub const TEXT_FINE_PRINT: &str = "mt-6 text-xs text-white/60 leading-relaxed";
pub const INPUT: &str = "w-full px-4 py-3 bg-slate-700 border-2 border-gray-500 rounded-lg text-white focus:outline-none focus:border-blue-400 transition-colors duration-200";
pub const INPUT_ERROR: &str = "w-full px-4 py-3 bg-slate-700 border-2 border-red-500 rounded-lg text-white focus:outline-none focus:border-red-400 transition-colors duration-200";
pub const FORM: &str = "mt-6 space-y-4";
pub const CHECKBOX_ROW: &str = "flex items-start space-x-3 text-sm text-white/80";
pub const CHECKBOX: &str = "mt-1 h-4 w-4 rounded border-gray-400 text-blue-600 focus:ring-blue-500";
pub const LINK: &str = "text-blue-400 underline";
pub const CARD_ERROR: &str = "bg-red-900/50 border border-red-800 rounded-lg p-3 text-red-200 text-sm";
pub const BUTTON_PRIMARY: &str = "w-full flex items-center justify-center py-4 px-8 rounded-lg text-lg font-bold text-white bg-gradient-to-r from-blue-500 to-blue-600 hover:from-blue-600 hover:to-blue-700 shadow-lg transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_LINK: &str = "mt-8 text-white/80 hover:text-white transition-colors duration-200 flex items-center space-x-2";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-50 flex items-center justify-center bg-black/70 p-4";
pub const MODAL_CARD: &str = "bg-white rounded-2xl shadow-2xl max-w-md w-full p-8 text-center";
pub const LOADING_SPINNER: &str = "animate-spin h-5 w-5 mr-3 border-2 border-white border-t-transparent rounded-full";
