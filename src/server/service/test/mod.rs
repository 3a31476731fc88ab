mod slide;
